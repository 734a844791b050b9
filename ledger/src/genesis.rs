//! Genesis block creation — the first block of every ledger.
//!
//! The genesis block has index 0, `previous_hash` `"0"` and a sentinel vote
//! whose voter and candidate are both `"genesis"`. It is mined like any other
//! block, but validation trusts it as-is: only the links and digests of later
//! blocks are checked.

use votechain_types::{BlockHash, Timestamp, Vote};

use crate::{Block, LedgerError, Sealer};

/// `previous_hash` of the genesis block.
pub const GENESIS_PREVIOUS_HASH: BlockHash = BlockHash::ZERO;

/// Seal the genesis block at `timestamp`.
pub fn create_genesis_block(sealer: &Sealer, timestamp: Timestamp) -> Result<Block, LedgerError> {
    sealer.seal(0, GENESIS_PREVIOUS_HASH, timestamp, Vote::genesis(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerConfig;

    fn sealer() -> Sealer {
        Sealer::from_config(&LedgerConfig::default().with_difficulty(2)).unwrap()
    }

    #[test]
    fn genesis_is_deterministic_for_fixed_time() {
        let block = create_genesis_block(&sealer(), Timestamp::new(1_700_000_000_000)).unwrap();
        assert_eq!(block.index, 0);
        assert_eq!(block.previous_hash, GENESIS_PREVIOUS_HASH);
        assert_eq!(block.nonce, 1052);
        assert_eq!(
            block.hash.to_string(),
            "0034d9a6b329ff4f5ba0f5daf6e48780a72c3c7df9a242c0d98245deb7f9fc54"
        );
    }

    #[test]
    fn genesis_carries_sentinel_vote() {
        let block = create_genesis_block(&sealer(), Timestamp::EPOCH).unwrap();
        assert!(block.is_genesis());
        assert_eq!(block.vote, Vote::genesis());
        assert_eq!(block.compute_hash().unwrap(), block.hash);
    }
}
