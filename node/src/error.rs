use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("ledger error: {0}")]
    Ledger(#[from] votechain_ledger::LedgerError),

    #[error("registry error: {0}")]
    Registry(#[from] votechain_registry::RegistryError),

    #[error("config error: {0}")]
    Config(String),

    #[error("no voter ID given")]
    MissingVoterId,

    #[error("voter ID {0} not found")]
    UnknownVoter(String),

    #[error("voter registration for {0} is not active")]
    RegistrationInactive(String),

    #[error("voter {0} has already cast a vote")]
    AlreadyVoted(String),

    #[error("unknown candidate {0}")]
    UnknownCandidate(String),

    #[error("ledger append timed out after {0:?}")]
    Timeout(Duration),

    #[error("ledger task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NodeError {
    /// Whether the ballot was refused on eligibility grounds rather than
    /// because something went wrong.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingVoterId
                | Self::UnknownVoter(_)
                | Self::RegistrationInactive(_)
                | Self::AlreadyVoted(_)
                | Self::UnknownCandidate(_)
        )
    }
}
