//! The vote record carried by every block.

use serde::{Deserialize, Serialize};

/// Sentinel value used for both fields of the genesis block's vote.
pub const GENESIS_SENTINEL: &str = "genesis";

/// A single cast vote.
///
/// Both fields are opaque identifiers; eligibility is checked by the voter
/// registry, never by the ledger. Field order is part of the block digest
/// preimage and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    pub voter: String,
    pub candidate: String,
}

impl Vote {
    pub fn new(voter: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            voter: voter.into(),
            candidate: candidate.into(),
        }
    }

    /// The vote embedded in the genesis block.
    pub fn genesis() -> Self {
        Self::new(GENESIS_SENTINEL, GENESIS_SENTINEL)
    }

    /// Whether this vote carries the genesis candidate sentinel.
    ///
    /// Tallying keys off the candidate only, so a real vote for a candidate
    /// named `"genesis"` is indistinguishable from the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.candidate == GENESIS_SENTINEL
    }
}
