//! The single-owner ledger.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use votechain_types::{Clock, SystemClock, Vote};
use votechain_work::Difficulty;

use crate::tally::{self, VoteCount};
use crate::validation::{self, ChainFault};
use crate::{create_genesis_block, Block, ChainSnapshot, LedgerConfig, LedgerError, Sealer};

/// Append-only chain of vote blocks, owned by one caller.
///
/// Mutation goes through `&mut self`, so exclusive access is enforced by the
/// borrow checker. Wrap it in a [`crate::SharedLedger`] to share it between
/// threads.
pub struct Ledger {
    /// Never empty: the genesis block is sealed in the constructor.
    blocks: Vec<Block>,
    sealer: Sealer,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Create a ledger on wall-clock time, sealing the genesis block.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Result<Self, LedgerError> {
        let sealer = Sealer::from_config(&config)?;
        let genesis = create_genesis_block(&sealer, clock.now())?;
        tracing::info!(
            difficulty = %sealer.difficulty(),
            genesis = %genesis.hash,
            "ledger created"
        );
        Ok(Self {
            blocks: vec![genesis],
            sealer,
            clock,
        })
    }

    /// Seal `vote` into a new block and append it.
    ///
    /// Does not check eligibility or duplicates; callers consult
    /// [`Ledger::has_voted`] and their registry first.
    pub fn append(&mut self, vote: Vote) -> Result<Block, LedgerError> {
        self.append_inner(vote, None)
    }

    /// Like [`Ledger::append`], but gives up once `cancel` is set.
    ///
    /// A cancelled append leaves the chain unchanged.
    pub fn append_cancellable(
        &mut self,
        vote: Vote,
        cancel: &AtomicBool,
    ) -> Result<Block, LedgerError> {
        self.append_inner(vote, Some(cancel))
    }

    fn append_inner(&mut self, vote: Vote, cancel: Option<&AtomicBool>) -> Result<Block, LedgerError> {
        let timestamp = self.clock.now();
        let block = self
            .sealer
            .seal_next(self.latest_block(), timestamp, vote, cancel)?;
        self.blocks.push(block.clone());
        Ok(block)
    }

    /// The most recently appended block (genesis when no votes were cast).
    pub fn latest_block(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    /// Number of blocks, genesis included.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.sealer.difficulty()
    }

    /// `true` when every link and digest after genesis checks out.
    pub fn validate(&self) -> Result<bool, LedgerError> {
        Ok(self.first_fault()?.is_none())
    }

    /// The first failing block and the invariant it broke, if any.
    pub fn first_fault(&self) -> Result<Option<ChainFault>, LedgerError> {
        validation::first_fault(&self.blocks)
    }

    pub fn has_voted(&self, voter: &str) -> bool {
        tally::has_voted(&self.blocks, voter)
    }

    pub fn vote_count(&self) -> VoteCount {
        tally::count_votes(&self.blocks)
    }

    /// Copy of the full chain; later appends do not affect it.
    pub fn chain(&self) -> ChainSnapshot {
        ChainSnapshot::from(self.blocks.clone())
    }

    pub(crate) fn into_parts(self) -> (Vec<Block>, Sealer, Arc<dyn Clock>) {
        (self.blocks, self.sealer, self.clock)
    }
}
