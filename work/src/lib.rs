//! Proof-of-work sealing for vote blocks.
//!
//! A block is sealed when the SHA-256 digest of its preimage followed by the
//! decimal nonce starts with a fixed number of `'0'` hex characters. The
//! search always yields the smallest satisfying nonce, exactly as a linear
//! scan from zero would, even though batches are evaluated in parallel.

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod validator;

pub use difficulty::Difficulty;
pub use error::WorkError;
pub use generator::{SearchLimits, WorkGenerator};
pub use validator::{seal_digest, validate_work};

use votechain_types::BlockHash;

/// The result of PoW generation: the winning nonce and the digest it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkNonce {
    pub nonce: u64,
    pub hash: BlockHash,
}
