//! # Blogger API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use api_server::AppState;
use api_server::config::AppConfig;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        environment = ?config.environment,
        "Starting Blogger API Server on {}:{}",
        config.host,
        config.port
    );

    // A configured database that cannot be reached is fatal.
    let state = AppState::connect(config.active_database())
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    api_server::run(listener, state)?.await
}
