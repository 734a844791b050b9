//! Voter registry — who may vote, and who already has.
//!
//! The registry lives beside the ledger, never inside it:
//! - The registry owns identity and eligibility (registered / voted flags)
//! - The ledger independently records cast votes and can confirm a voter's history
//! - Callers consult both before appending, so neither is the single line of defense

pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::VoterRegistry;
pub use types::Voter;
