//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

/// Shared application state.
///
/// The repository is an injected trait object rather than a process-wide
/// connection handle, so tests swap in the in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Which store backs `posts` - surfaced by the health endpoint so a
    /// silently missing DATABASE_URL is visible without reading logs.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (posts, storage): (Arc<dyn PostRepository>, &'static str) = {
            if let Some(config) = db_config {
                match config.connect().await {
                    Ok(conn) => (
                        Arc::new(quill_infra::PostgresPostRepository::new(conn)),
                        "postgres",
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, storage): (Arc<dyn PostRepository>, &'static str) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), "memory")
        };

        tracing::info!("Application state initialized (storage: {})", storage);

        Self { posts, storage }
    }

    /// Build state around an explicit repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            storage: "memory",
        }
    }
}
