//! votechain node — wires the ledger to its collaborators.
//!
//! The node is the single owner of process state:
//! - Loads configuration (ledger settings, roster, candidates, logging)
//! - Owns the voter registry and the shared ledger
//! - Screens ballots against both before sealing them
//! - Runs proof-of-work off the async runtime with an optional deadline

pub mod ballot;
pub mod config;
pub mod error;
pub mod service;

pub use ballot::{BallotBox, Turnout};
pub use config::{NodeConfig, VoterEntry};
pub use error::NodeError;
pub use service::LedgerService;
