//! Block sealing — runs the nonce search and assembles the block.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use votechain_types::{BlockHash, Timestamp, Vote};
use votechain_utils::format_elapsed;
use votechain_work::{Difficulty, SearchLimits, WorkGenerator};

use crate::{Block, LedgerConfig, LedgerError};

/// Turns vote data into sealed blocks at a fixed difficulty.
pub struct Sealer {
    generator: WorkGenerator,
    difficulty: Difficulty,
    max_nonce: Option<u64>,
}

impl Sealer {
    pub fn from_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            generator: WorkGenerator::with_threads(config.work_threads)?,
            difficulty: config.difficulty,
            max_nonce: config.max_nonce,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mine a block for the given fields.
    ///
    /// Either the whole block is returned or nothing is: a cancelled or
    /// exhausted search yields an error and no partial state.
    pub fn seal(
        &self,
        index: u64,
        previous_hash: BlockHash,
        timestamp: Timestamp,
        vote: Vote,
        cancel: Option<&AtomicBool>,
    ) -> Result<Block, LedgerError> {
        let started = Instant::now();
        let preimage = Block::preimage(index, &previous_hash, timestamp, &vote)?;

        let mut limits = SearchLimits::unbounded().with_max_nonce(self.max_nonce);
        if let Some(flag) = cancel {
            limits = limits.with_cancel(flag);
        }
        let work = self.generator.generate(&preimage, self.difficulty, limits)?;

        tracing::debug!(
            index,
            nonce = work.nonce,
            hash = %work.hash,
            elapsed = %format_elapsed(started.elapsed()),
            "block sealed"
        );

        Ok(Block {
            index,
            timestamp,
            vote,
            previous_hash,
            hash: work.hash,
            nonce: work.nonce,
        })
    }

    /// Mine the block that follows `previous`.
    pub fn seal_next(
        &self,
        previous: &Block,
        timestamp: Timestamp,
        vote: Vote,
        cancel: Option<&AtomicBool>,
    ) -> Result<Block, LedgerError> {
        self.seal(previous.index + 1, previous.hash, timestamp, vote, cancel)
    }
}
