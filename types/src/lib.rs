//! Fundamental types for the votechain ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! votes, block hashes, timestamps and the clock abstraction.

pub mod block;
pub mod error;
pub mod time;
pub mod vote;

pub use block::BlockHash;
pub use error::TypesError;
pub use time::{Clock, SystemClock, Timestamp};
pub use vote::{Vote, GENESIS_SENTINEL};
