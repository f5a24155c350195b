use actix_web::{HttpResponse, get, post, web};
use log::{debug, info, warn};

use super::error::ApiError;
use super::models::{AppState, MessageResponse, NewTxRequest, PendingResponse};

/// Queue a transaction for the next block.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> Result<HttpResponse, ApiError> {
    let NewTxRequest {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let (Some(sender), Some(recipient), Some(amount)) = (sender, recipient, amount) else {
        warn!("POST /transactions/new - rejected: missing values");
        return Err(ApiError::MissingValues);
    };
    debug!(
        "POST /transactions/new - sender={} recipient={} amount={}",
        sender, recipient, amount
    );

    let index = {
        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        bc.new_transaction(sender, recipient, amount)
    };

    info!("POST /transactions/new - queued for block #{}", index);
    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!("Transaction will be added to Block {index}"),
    }))
}

/// List transactions waiting for the next block.
#[get("/transactions/pending")]
pub async fn pending_transactions(state: web::Data<AppState>) -> HttpResponse {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let pool = bc.pending();
    HttpResponse::Ok().json(PendingResponse {
        size: pool.len(),
        transactions: pool.iter().collect(),
    })
}
