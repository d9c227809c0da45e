// src/main.rs
use actix_web::{App, HttpServer, middleware, web};
use leafscan::services::{GatewayConfig, GatewayService};
use leafscan::{AppState, handlers};
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting leafscan service...");

    // A missing API key is a per-request configuration fault, not a startup
    // crash; the service must boot unconfigured and answer preflight.
    let gateway = Arc::new(GatewayService::new(GatewayConfig::from_env()));

    let app_state = AppState { gateway };

    info!("Starting HTTP server on 0.0.0.0:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(handlers::permissive_cors())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
