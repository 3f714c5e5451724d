//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::{DatabaseConfig, DbErr, SeaOrmPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Connect the database and build the application state.
    ///
    /// A connection failure propagates to the caller; startup is the only
    /// place infrastructure errors are allowed to be fatal.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let conn = quill_infra::connect(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(SeaOrmPostStore::new(conn)),
        })
    }

    /// Build state around an existing store. Used by the test harness,
    /// which manages its own connection and migrations.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}
