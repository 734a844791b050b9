//! Vote membership and tally queries over a slice of blocks.

use std::collections::BTreeMap;

use crate::Block;

/// Votes per candidate. Candidates without votes are absent; read missing
/// keys as zero.
pub type VoteCount = BTreeMap<String, u64>;

/// Whether any block, genesis included, records a vote by `voter`.
pub fn has_voted(blocks: &[Block], voter: &str) -> bool {
    blocks.iter().any(|block| block.vote.voter == voter)
}

/// Count votes per candidate, skipping blocks with the genesis candidate sentinel.
pub fn count_votes(blocks: &[Block]) -> VoteCount {
    let mut counts = VoteCount::new();
    for block in blocks.iter().filter(|block| !block.is_genesis()) {
        *counts.entry(block.vote.candidate.clone()).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use votechain_types::{BlockHash, Timestamp, Vote};

    fn block(index: u64, voter: &str, candidate: &str) -> Block {
        Block {
            index,
            timestamp: Timestamp::EPOCH,
            vote: Vote::new(voter, candidate),
            previous_hash: BlockHash::ZERO,
            hash: BlockHash::ZERO,
            nonce: 0,
        }
    }

    #[test]
    fn tally_skips_genesis_and_omits_zero_counts() {
        let blocks = [
            block(0, "genesis", "genesis"),
            block(1, "v1", "A"),
            block(2, "v2", "B"),
            block(3, "v3", "A"),
        ];
        let counts = count_votes(&blocks);
        assert_eq!(counts, VoteCount::from([("A".into(), 2), ("B".into(), 1)]));
        assert!(!counts.contains_key("C"));
        assert!(!counts.contains_key("genesis"));
    }

    #[test]
    fn genesis_voter_id_matches_sentinel() {
        let blocks = [block(0, "genesis", "genesis")];
        assert!(has_voted(&blocks, "genesis"));
        assert!(!has_voted(&blocks, "V001"));
    }

    #[test]
    fn real_vote_for_sentinel_candidate_is_not_counted() {
        let blocks = [block(0, "genesis", "genesis"), block(1, "V001", "genesis")];
        assert!(count_votes(&blocks).is_empty());
        assert!(has_voted(&blocks, "V001"));
    }
}
