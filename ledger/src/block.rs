//! Vote block — one sealed, immutable ledger entry.

use serde::{Deserialize, Serialize};
use votechain_types::{BlockHash, Timestamp, Vote};
use votechain_work::{seal_digest, Difficulty};

use crate::LedgerError;

/// A sealed block carrying exactly one vote.
///
/// Serialized field names follow the export format consumed by audit
/// tooling (`previousHash`, camelCase).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain; the genesis block is 0.
    pub index: u64,

    /// Milliseconds since the Unix epoch, captured once at seal time.
    pub timestamp: Timestamp,

    /// The embedded vote.
    pub vote: Vote,

    /// Hash of the preceding block (`"0"` for genesis).
    pub previous_hash: BlockHash,

    /// Digest of this block's content, meeting the ledger's difficulty.
    pub hash: BlockHash,

    /// The nonce found by the proof-of-work search.
    pub nonce: u64,
}

impl Block {
    /// Canonical digest preimage without the nonce.
    ///
    /// Decimal index, previous hash text, decimal timestamp and the compact
    /// JSON of the vote (`{"voter":…,"candidate":…}`), concatenated with no
    /// separators. The nonce's decimal form is appended by the sealer.
    pub fn preimage(
        index: u64,
        previous_hash: &BlockHash,
        timestamp: Timestamp,
        vote: &Vote,
    ) -> Result<Vec<u8>, LedgerError> {
        let vote_json = serde_json::to_string(vote)?;
        Ok(format!("{index}{previous_hash}{}{vote_json}", timestamp.as_millis()).into_bytes())
    }

    /// Recompute this block's digest from its stored fields.
    pub fn compute_hash(&self) -> Result<BlockHash, LedgerError> {
        let preimage = Self::preimage(self.index, &self.previous_hash, self.timestamp, &self.vote)?;
        Ok(seal_digest(&preimage, self.nonce))
    }

    /// Whether the stored hash meets `difficulty`.
    pub fn verify_work(&self, difficulty: Difficulty) -> bool {
        difficulty.is_met_by(&self.hash)
    }

    /// Whether this block carries the genesis sentinel vote.
    pub fn is_genesis(&self) -> bool {
        self.vote.is_genesis()
    }
}
