//! Registry record types.

use serde::{Deserialize, Serialize};

/// A registered voter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Unique voter identifier; the same value is recorded in ledger votes.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the registration is active.
    pub registered: bool,
    /// Set once the voter's ballot has been accepted.
    pub has_voted: bool,
}
