//! Append-only vote ledger.
//!
//! Every vote is sealed into its own block: the block commits to its index,
//! the previous block's hash, a millisecond timestamp and the vote, and is
//! mined until its SHA-256 digest carries the configured number of leading
//! zero hex characters. Blocks are never removed, reordered or mutated.
//! Integrity is checked by walking the chain and recomputing every link and
//! digest after the genesis block.

pub mod block;
pub mod config;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod seal;
pub mod shared;
pub mod snapshot;
pub mod tally;
pub mod validation;

pub use block::Block;
pub use config::LedgerConfig;
pub use error::LedgerError;
pub use genesis::{create_genesis_block, GENESIS_PREVIOUS_HASH};
pub use ledger::Ledger;
pub use seal::Sealer;
pub use shared::SharedLedger;
pub use snapshot::ChainSnapshot;
pub use tally::VoteCount;
pub use validation::{ChainFault, FaultKind};
