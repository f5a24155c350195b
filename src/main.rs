mod api;
mod blockchain;
mod config;
mod transaction;

use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let Config { host, port } = Config::from_env();

    let state = web::Data::new(AppState::default());
    info!(
        "starting ledger node {} at http://{}:{}",
        state.node_identifier, host, port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
