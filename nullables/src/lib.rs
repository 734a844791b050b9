//! Nullable infrastructure for deterministic testing.
//!
//! Replaces real-world dependencies (wall-clock time) with controllable
//! fakes so ledger tests produce identical blocks on every run.

pub mod clock;

pub use clock::NullClock;
