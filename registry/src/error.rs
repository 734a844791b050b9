use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("voter with ID {0} already exists")]
    DuplicateVoter(String),

    #[error("voter {0} not found")]
    VoterNotFound(String),
}
