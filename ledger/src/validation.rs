//! Chain integrity checks.
//!
//! Walks the chain from the second block onward. Each block must link to its
//! predecessor's stored hash, and its stored hash must equal the digest
//! recomputed from its own fields. The two checks are independent: a block
//! whose link was rewritten still fails even if its own hash was recomputed
//! to match.
//!
//! The genesis block is trusted as seeded and is not re-hashed here.

use std::fmt;

use crate::{Block, LedgerError};
use votechain_work::Difficulty;

/// Which invariant a block violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    /// `previous_hash` differs from the preceding block's `hash`.
    BrokenLink,
    /// Stored `hash` differs from the digest of the block's fields.
    HashMismatch,
}

/// The first integrity violation found in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainFault {
    /// Position of the offending block in the chain.
    pub position: usize,
    pub kind: FaultKind,
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FaultKind::BrokenLink => {
                write!(f, "block {} does not link to its predecessor", self.position)
            }
            FaultKind::HashMismatch => {
                write!(f, "block {} hash does not match its contents", self.position)
            }
        }
    }
}

/// Find the first integrity violation, if any.
///
/// Only a digest failure is an error; a broken chain is `Ok(Some(_))`.
pub fn first_fault(blocks: &[Block]) -> Result<Option<ChainFault>, LedgerError> {
    for (offset, pair) in blocks.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let position = offset + 1;

        let kind = if current.previous_hash != previous.hash {
            Some(FaultKind::BrokenLink)
        } else if current.compute_hash()? != current.hash {
            Some(FaultKind::HashMismatch)
        } else {
            None
        };

        if let Some(kind) = kind {
            let fault = ChainFault { position, kind };
            tracing::warn!(position, ?kind, "chain integrity check failed");
            return Ok(Some(fault));
        }
    }
    Ok(None)
}

/// Positions of blocks whose stored hash does not meet `difficulty`.
///
/// Not part of [`first_fault`]; the genesis block is included here, so this
/// doubles as the only proof-of-work audit of the seed block.
pub fn unsealed_blocks(blocks: &[Block], difficulty: Difficulty) -> Vec<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| !block.verify_work(difficulty))
        .map(|(position, _)| position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_genesis_block, LedgerConfig, Sealer};
    use votechain_types::{BlockHash, Timestamp, Vote};

    fn chain(votes: usize) -> Vec<Block> {
        let sealer = Sealer::from_config(&LedgerConfig::default().with_difficulty(1)).unwrap();
        let mut blocks = vec![create_genesis_block(&sealer, Timestamp::new(1)).unwrap()];
        for i in 0..votes {
            let vote = Vote::new(format!("V{i:03}"), "A");
            let next = sealer
                .seal_next(blocks.last().unwrap(), Timestamp::new(2 + i as u64), vote, None)
                .unwrap();
            blocks.push(next);
        }
        blocks
    }

    #[test]
    fn empty_and_genesis_only_chains_are_clean() {
        assert_eq!(first_fault(&[]).unwrap(), None);
        assert_eq!(first_fault(&chain(0)).unwrap(), None);
    }

    #[test]
    fn tampered_genesis_is_not_detected() {
        let mut blocks = chain(0);
        blocks[0].vote.candidate = "A".into();
        assert_eq!(first_fault(&blocks).unwrap(), None);
    }

    #[test]
    fn link_is_checked_before_digest() {
        let mut blocks = chain(2);
        blocks[2].previous_hash = BlockHash::new([7; 32]);
        blocks[2].hash = blocks[2].compute_hash().unwrap();

        let fault = first_fault(&blocks).unwrap().unwrap();
        assert_eq!(fault.position, 2);
        assert_eq!(fault.kind, FaultKind::BrokenLink);
    }

    #[test]
    fn reports_first_fault_only() {
        let mut blocks = chain(3);
        blocks[1].vote.candidate = "B".into();
        blocks[3].nonce += 1;

        let fault = first_fault(&blocks).unwrap().unwrap();
        assert_eq!(
            fault,
            ChainFault {
                position: 1,
                kind: FaultKind::HashMismatch
            }
        );
        assert_eq!(fault.to_string(), "block 1 hash does not match its contents");
    }

    #[test]
    fn unsealed_blocks_audits_every_position() {
        let mut blocks = chain(2);
        assert!(unsealed_blocks(&blocks, Difficulty::new(1)).is_empty());
        blocks[0].hash = BlockHash::new([0xFF; 32]);
        assert_eq!(unsealed_blocks(&blocks, Difficulty::new(1)), vec![0]);
    }
}
