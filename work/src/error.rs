use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("work generation cancelled")]
    Cancelled,

    #[error("no nonce up to {max_nonce} satisfies the difficulty")]
    Exhausted { max_nonce: u64 },

    #[error("failed to build work thread pool: {0}")]
    ThreadPool(String),
}
