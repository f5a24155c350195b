mod chain;
pub mod error;
mod health;
mod mining;
pub mod models;
mod tx;

use actix_web::web::ServiceConfig;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(chain::full_chain)
        .service(chain::validate_chain)
        .service(mining::mine)
        .service(tx::new_transaction)
        .service(tx::pending_transactions);
}
