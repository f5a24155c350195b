use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Link from a block to its predecessor.
///
/// The genesis block has no predecessor and carries the integer sentinel `1`
/// instead of a digest; every later block carries the hex digest of the block
/// before it. Serialized untagged, so the sentinel stays a JSON number on the
/// wire and in the canonical hash input. Whether the number-vs-string mismatch
/// in the genesis block was ever intended is unknown; it is kept as observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviousHash {
    Sentinel(u64),
    Digest(String),
}

impl PreviousHash {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, PreviousHash::Sentinel(_))
    }
}

impl From<String> for PreviousHash {
    fn from(digest: String) -> Self {
        PreviousHash::Digest(digest)
    }
}

/// A sealed block. Field names are part of the hash input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // Unix seconds (UTC) with sub-second precision
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: PreviousHash,
}

impl Block {
    /// Build a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: PreviousHash,
    ) -> Self {
        Self {
            index,
            timestamp: now_secs(),
            transactions,
            proof,
            previous_hash,
        }
    }
}

fn now_secs() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9
}
