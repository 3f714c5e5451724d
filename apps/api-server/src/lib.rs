//! # Quill API Server
//!
//! Actix-web CRUD service for blog posts. The server construction lives
//! here (rather than in `main.rs`) so the integration harness can embed
//! the exact production app against its own listener and database.

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;

use state::AppState;

/// Build and start the HTTP server on an already-bound listener.
///
/// Returns the `Server` future without awaiting it; the caller decides
/// whether to block on it (`main`) or spawn it (the test harness).
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
