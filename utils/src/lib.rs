//! Shared utilities for the votechain ledger.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, LogFormat, LogFormatError};
pub use time::format_elapsed;
