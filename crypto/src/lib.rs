//! Cryptographic primitives for the votechain ledger.
//!
//! - **SHA-256** for block digests

pub mod hash;

pub use hash::{hash_block, sha256, sha256_multi};
