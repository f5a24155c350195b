use actix_web::{HttpResponse, get, web};
use log::{debug, info, warn};

use super::error::ApiError;
use super::models::{AppState, MineResponse};
use crate::blockchain::pow::proof_of_work;
use crate::blockchain::{MINING_REWARD, MINING_REWARD_SENDER};
use crate::transaction::Transaction;

/// Mine a new block:
/// - Run PoW against the last block's proof (off the async workers)
/// - Reward this node with a transaction from "0"
/// - Seal the pending pool into the new block
///
/// If another block was sealed while searching, the proof is stale and the
/// search restarts from the new tip.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    loop {
        let (tip_index, last_proof) = {
            let bc = state.blockchain.lock().expect("mutex poisoned");
            let last = bc.last_block();
            (last.index, last.proof)
        };
        debug!("MINER - searching proof on top of block #{}", tip_index);

        let proof = web::block(move || proof_of_work(last_proof))
            .await
            .map_err(|e| ApiError::Mining(e.to_string()))?;

        let reward = Transaction::new(
            MINING_REWARD_SENDER,
            state.node_identifier.as_str(),
            MINING_REWARD,
        );
        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        let Some(block) = bc.seal_on_tip(tip_index, proof, reward) else {
            warn!(
                "MINER - tip moved past #{} during search, retrying",
                tip_index
            );
            continue;
        };

        let resp = MineResponse {
            message: "New Block Forged",
            index: block.index,
            transactions: block.transactions.clone(),
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        };
        info!(
            "MINER - forged block #{} (proof={}, txs={})",
            resp.index,
            resp.proof,
            resp.transactions.len()
        );
        return Ok(HttpResponse::Ok().json(resp));
    }
}
