use crate::blockchain::{Block, Blockchain, PreviousHash};
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::sync::Mutex;
use uuid::Uuid;

/// Shared application state: the ledger (chain + pending pool) behind one lock,
/// and this node's identity.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub node_identifier: String,
}

impl AppState {
    pub fn new(node_identifier: impl Into<String>) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new()),
            node_identifier: node_identifier.into(),
        }
    }
}

impl Default for AppState {
    /// Fresh ledger with a random node identifier (UUID v4, no dashes).
    fn default() -> Self {
        Self::new(Uuid::new_v4().simple().to_string())
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: PreviousHash,
}

/* ---------- TX API Models ---------- */

/// Fields are optional so a missing one maps to our own 400, not a parse error.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<Number>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PendingResponse<'a> {
    pub size: usize,
    pub transactions: Vec<&'a Transaction>,
}
