//! Hex-prefix difficulty predicate.

use serde::{Deserialize, Serialize};
use std::fmt;
use votechain_types::BlockHash;

/// Number of leading `'0'` hex characters a sealed block's digest must have.
///
/// Fixed for the lifetime of a ledger; there is no retargeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(u32);

impl Difficulty {
    /// Reference difficulty: four leading zero hex characters.
    pub const DEFAULT: Self = Self(4);

    /// A digest is 64 hex characters, so anything above this can never be met.
    pub const MAX_ZEROS: u32 = 64;

    pub const fn new(zeros: u32) -> Self {
        Self(zeros)
    }

    pub fn zeros(&self) -> u32 {
        self.0
    }

    /// Whether `hash` has at least `zeros` leading `'0'` hex characters.
    pub fn is_met_by(&self, hash: &BlockHash) -> bool {
        self.0 <= Self::MAX_ZEROS && hash.leading_zero_nibbles() >= self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
