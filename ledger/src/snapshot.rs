//! Chain snapshots — cheaply cloned, copy-on-write views of the block sequence.
//!
//! A snapshot answers every read query (integrity, membership, tally) without
//! touching the live ledger, so readers never wait on a proof-of-work search.
//! Snapshots can also be built from blocks obtained elsewhere, such as a
//! deserialized export, and audited with the same checks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

use votechain_work::Difficulty;

use crate::tally::{self, VoteCount};
use crate::validation::{self, ChainFault};
use crate::{Block, LedgerError};

/// Read-only ordered view of a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainSnapshot {
    blocks: Arc<Vec<Block>>,
}

impl ChainSnapshot {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Owned copy of the blocks, e.g. for an auditor to edit and re-check.
    pub fn to_vec(&self) -> Vec<Block> {
        self.blocks.to_vec()
    }

    /// `true` when every link and digest after genesis checks out.
    pub fn validate(&self) -> Result<bool, LedgerError> {
        Ok(self.first_fault()?.is_none())
    }

    pub fn first_fault(&self) -> Result<Option<ChainFault>, LedgerError> {
        validation::first_fault(&self.blocks)
    }

    pub fn has_voted(&self, voter: &str) -> bool {
        tally::has_voted(&self.blocks, voter)
    }

    pub fn vote_count(&self) -> VoteCount {
        tally::count_votes(&self.blocks)
    }

    pub fn unsealed_blocks(&self, difficulty: Difficulty) -> Vec<usize> {
        validation::unsealed_blocks(&self.blocks, difficulty)
    }

    /// Append `block` in place when no other handle shares this snapshot.
    ///
    /// Clones handed out earlier keep their view: if any are still alive the
    /// blocks are copied once before the push, so publishing after every seal
    /// costs amortised O(1) unless readers are holding on to old snapshots.
    pub(crate) fn push(&mut self, block: Block) {
        Arc::make_mut(&mut self.blocks).push(block);
    }
}

impl From<Vec<Block>> for ChainSnapshot {
    fn from(blocks: Vec<Block>) -> Self {
        Self {
            blocks: Arc::new(blocks),
        }
    }
}

impl<'a> IntoIterator for &'a ChainSnapshot {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl Serialize for ChainSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.blocks.iter())
    }
}

impl<'de> Deserialize<'de> for ChainSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Block>::deserialize(deserializer).map(Self::from)
    }
}
