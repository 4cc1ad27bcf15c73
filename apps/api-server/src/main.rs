//! # Forecourt API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use forecourt_core::policy::AccessPolicy;
use middleware::read_only::ReadOnlyGuard;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Forecourt API Server on {}:{} (read_only: {})",
        config.host,
        config.port,
        config.read_only
    );

    // Build application state
    let state = AppState::new(config.database.as_ref()).await;

    // Content generation is pure computation, so it stays writable even
    // when the inventory is locked down
    let policy = if config.read_only {
        AccessPolicy::read_only().exempting("/api/content")
    } else {
        AccessPolicy::read_write()
    };

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(ReadOnlyGuard::new(policy.clone()))
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
