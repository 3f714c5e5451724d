//! Binary entry point for the Quill API server.

use std::net::TcpListener;

use api_server::config::AppConfig;
use api_server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    // A reachable database is a hard startup requirement; there is no
    // in-memory fallback.
    let Some(db_config) = config.database else {
        tracing::error!("DATABASE_URL not set; refusing to start");
        return Err(std::io::Error::other("DATABASE_URL not set"));
    };

    let state = AppState::new(&db_config)
        .await
        .map_err(std::io::Error::other)?;

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    api_server::run(listener, state)?.await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,quill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
