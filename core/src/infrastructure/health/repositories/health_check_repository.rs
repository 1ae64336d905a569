use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn ping(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {e}");
            CoreError::Internal("database unreachable".into())
        })?;
        Ok(start.elapsed().as_millis() as u64)
    }

    /// Unlike `ping`, readiness never errors: an unreachable database is a
    /// reportable state, not a failure of the probe itself.
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();
        let connected = match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!("Database readiness probe failed: {e}");
                false
            }
        };
        Ok(DatabaseHealthStatus {
            connected,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
