use thiserror::Error;
use votechain_work::WorkError;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The vote could not be canonicalised, so no digest can be computed.
    #[error("failed to serialize vote for digest: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("proof-of-work search failed: {0}")]
    Work(#[from] WorkError),

    #[error("invalid ledger config: {0}")]
    Config(String),
}
