use sea_orm::DatabaseConnection;
use tracing::{info, warn};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shared pool (absent in tests that never touch the store)
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Close the pool. Call once, after the HTTP server has stopped.
    pub async fn shutdown(&self) {
        let Some(db) = self.db.clone() else {
            return;
        };
        match db.close().await {
            Ok(()) => info!("db_pool=closed"),
            Err(e) => warn!(error = %e, "db_pool=close_failed"),
        }
    }
}
