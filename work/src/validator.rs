//! PoW validation.

use crate::Difficulty;
use votechain_crypto::hash_block;
use votechain_types::BlockHash;

/// Digest of `preimage` followed by the decimal rendering of `nonce`.
pub fn seal_digest(preimage: &[u8], nonce: u64) -> BlockHash {
    let nonce = nonce.to_string();
    hash_block(&[preimage, nonce.as_bytes()])
}

/// Validate that a work nonce meets the difficulty for a given preimage.
pub fn validate_work(preimage: &[u8], nonce: u64, difficulty: Difficulty) -> bool {
    difficulty.is_met_by(&seal_digest(preimage, nonce))
}

#[cfg(test)]
mod tests {
    use super::*;
    use votechain_crypto::sha256;

    #[test]
    fn seal_digest_appends_decimal_nonce() {
        let expected = BlockHash::new(sha256(b"payload1234"));
        assert_eq!(seal_digest(b"payload", 1234), expected);
    }

    #[test]
    fn zero_difficulty_always_validates() {
        assert!(validate_work(b"anything", 7, Difficulty::new(0)));
    }
}
