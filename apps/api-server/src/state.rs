//! Application state - shared across all handlers.

use std::sync::Arc;

use blogger_core::error::RepoError;
use blogger_core::ports::PostStore;
use blogger_infra::InMemoryPostStore;
use blogger_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blogger_infra::{DatabaseConnections, PostgresPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// State over an existing store handle.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Build the state for the configured database, or the in-memory store when none is set.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("No database configured. Running with the in-memory post store.");
            return Ok(Self::with_store(Arc::new(InMemoryPostStore::new())));
        };

        let posts = Self::database_store(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::with_store(posts))
    }

    #[cfg(feature = "postgres")]
    async fn database_store(config: &DatabaseConfig) -> Result<Arc<dyn PostStore>, RepoError> {
        let connections = DatabaseConnections::init(config).await.map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            RepoError::Connection(e.to_string())
        })?;

        Ok(Arc::new(PostgresPostStore::new(connections.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn database_store(_config: &DatabaseConfig) -> Result<Arc<dyn PostStore>, RepoError> {
        Err(RepoError::Connection(
            "a database is configured but the server was built without the postgres feature"
                .to_string(),
        ))
    }
}
