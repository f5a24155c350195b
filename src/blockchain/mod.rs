pub mod block;
pub mod hash;
pub mod model;
pub mod pow;

pub use block::{Block, PreviousHash};
pub use model::Blockchain;

/// Proof stored in the genesis block; seeds the first proof-of-work search.
pub const GENESIS_PROOF: u64 = 100;

/// Placeholder link of the genesis block (there is no digest to point at).
pub const GENESIS_PREVIOUS_HASH: u64 = 1;

/// Required hex prefix of `sha256("{last_proof}{proof}")` (16 bits of work).
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Sender recorded on the reward transaction a node pays itself when mining.
pub const MINING_REWARD_SENDER: &str = "0";

/// Amount of the mining reward transaction.
pub const MINING_REWARD: u64 = 1;
