//! Block hash type for the vote chain.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// A 32-byte SHA-256 block digest.
///
/// The textual form is lowercase hex. The all-zero value is reserved as the
/// "no predecessor" marker of the genesis block and renders as `"0"`, which is
/// also the form it takes inside a block's digest preimage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHash([u8; 32]);

impl Default for BlockHash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl BlockHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Number of leading `'0'` characters in the full 64-character hex rendering.
    pub fn leading_zero_nibbles(&self) -> u32 {
        let mut count = 0;
        for byte in &self.0 {
            if *byte == 0 {
                count += 2;
                continue;
            }
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
        count
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for BlockHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Self::ZERO);
        }
        let invalid = || TypesError::InvalidBlockHash {
            value: s.to_string(),
        };
        // Only the exact rendering is accepted, so text compares equal iff
        // the parsed hashes do.
        if s.len() != 64 || !s.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(invalid());
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| invalid())?;
        let hash = Self(bytes);
        if hash.is_zero() {
            return Err(invalid());
        }
        Ok(hash)
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_as_single_digit() {
        assert_eq!(BlockHash::ZERO.to_string(), "0");
        assert_eq!("0".parse::<BlockHash>().unwrap(), BlockHash::ZERO);
    }

    #[test]
    fn display_is_lowercase_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xAB;
        bytes[31] = 0x01;
        let rendered = BlockHash::new(bytes).to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("ab"));
        assert!(rendered.ends_with("01"));
    }

    #[test]
    fn parse_rejects_wrong_length_and_garbage() {
        assert!("abcd".parse::<BlockHash>().is_err());
        assert!("zz".repeat(32).parse::<BlockHash>().is_err());
        assert!("".parse::<BlockHash>().is_err());
    }

    #[test]
    fn parse_accepts_only_the_canonical_rendering() {
        let lower = "ab".repeat(32);
        assert_eq!(lower.parse::<BlockHash>().unwrap().to_string(), lower);
        assert!("AB".repeat(32).parse::<BlockHash>().is_err());
        assert!(format!("Ab{}", "ab".repeat(31)).parse::<BlockHash>().is_err());
        // The zero hash is only ever written as "0".
        assert!("0".repeat(64).parse::<BlockHash>().is_err());
        assert!("00".parse::<BlockHash>().is_err());
    }

    #[test]
    fn leading_zero_nibbles_counts_half_bytes() {
        let mut bytes = [0xFFu8; 32];
        assert_eq!(BlockHash::new(bytes).leading_zero_nibbles(), 0);
        bytes[0] = 0x0F;
        assert_eq!(BlockHash::new(bytes).leading_zero_nibbles(), 1);
        bytes[0] = 0x00;
        bytes[1] = 0x00;
        bytes[2] = 0x1F;
        assert_eq!(BlockHash::new(bytes).leading_zero_nibbles(), 4);
    }

    #[test]
    fn serde_uses_hex_string() {
        let hash = BlockHash::new([0x11; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(32)));
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
