//! # Blogger API Server
//!
//! Actix-web application serving the `/posts` resource.
//! The binary in `main.rs` and the integration suite both start it through [`run`].

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod representation;
pub mod state;
pub mod telemetry;

pub use state::AppState;

/// Build the HTTP server on an already-bound listener.
///
/// The returned [`Server`] does nothing until it is awaited or spawned.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(middleware::error::json_config())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
