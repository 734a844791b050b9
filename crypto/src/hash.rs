//! SHA-256 hashing for block digests.

use sha2::{Digest, Sha256};
use votechain_types::BlockHash;

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Hash a block preimage to produce its `BlockHash`.
pub fn hash_block(parts: &[&[u8]]) -> BlockHash {
    BlockHash::new(sha256_multi(parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            BlockHash::new(sha256(b"")).to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            BlockHash::new(sha256(b"abc")).to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_different_inputs() {
        assert_ne!(sha256(b"hello"), sha256(b"world"));
    }

    #[test]
    fn sha256_multi_equivalent() {
        let single = sha256(b"helloworld");
        let multi = sha256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn hash_block_returns_blockhash() {
        let h = hash_block(&[b"test block data"]);
        assert!(!h.is_zero());
    }
}
