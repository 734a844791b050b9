//! Thread-safe ledger handle.
//!
//! Appends are serialised by a single writer lock that also holds the chain
//! tip. The nonce search runs while holding only that lock; readers work off
//! the last published [`ChainSnapshot`] and never wait on mining. The sealed
//! block is pushed onto the published snapshot under its write lock, so an
//! append is either fully visible or not at all.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use votechain_types::{Clock, SystemClock, Vote};
use votechain_work::Difficulty;

use crate::tally::VoteCount;
use crate::validation::ChainFault;
use crate::{Block, ChainSnapshot, Ledger, LedgerConfig, LedgerError, Sealer};

/// A ledger that can be shared across threads (`Arc<SharedLedger>`).
pub struct SharedLedger {
    sealer: Sealer,
    clock: Arc<dyn Clock>,
    /// Writer lock; guards the latest sealed block.
    tip: Mutex<Block>,
    published: RwLock<ChainSnapshot>,
}

impl SharedLedger {
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Result<Self, LedgerError> {
        Ledger::with_clock(config, clock).map(Self::from)
    }

    /// Seal `vote` and publish the extended chain.
    pub fn append(&self, vote: Vote) -> Result<Block, LedgerError> {
        self.append_inner(vote, None)
    }

    /// Like [`SharedLedger::append`], but gives up once `cancel` is set.
    pub fn append_cancellable(&self, vote: Vote, cancel: &AtomicBool) -> Result<Block, LedgerError> {
        self.append_inner(vote, Some(cancel))
    }

    fn append_inner(&self, vote: Vote, cancel: Option<&AtomicBool>) -> Result<Block, LedgerError> {
        // Publication is a single push after sealing, so a poisoned lock never
        // hides a half-applied append.
        let mut tip = self.tip.lock().unwrap_or_else(PoisonError::into_inner);
        let timestamp = self.clock.now();
        let block = self.sealer.seal_next(&tip, timestamp, vote, cancel)?;

        {
            let mut published = self
                .published
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            published.push(block.clone());
        }
        *tip = block.clone();
        Ok(block)
    }

    /// The chain as of the last completed append.
    pub fn snapshot(&self) -> ChainSnapshot {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.sealer.difficulty()
    }

    pub fn validate(&self) -> Result<bool, LedgerError> {
        self.snapshot().validate()
    }

    pub fn first_fault(&self) -> Result<Option<ChainFault>, LedgerError> {
        self.snapshot().first_fault()
    }

    pub fn has_voted(&self, voter: &str) -> bool {
        self.snapshot().has_voted(voter)
    }

    pub fn vote_count(&self) -> VoteCount {
        self.snapshot().vote_count()
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        let (blocks, sealer, clock) = ledger.into_parts();
        let tip = blocks[blocks.len() - 1].clone();
        Self {
            sealer,
            clock,
            tip: Mutex::new(tip),
            published: RwLock::new(ChainSnapshot::from(blocks)),
        }
    }
}
