//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use gate_core::errors::DomainError;
use gate_shared::config::DatabaseConfig;

/// Creates a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Connection URL and pool sizing
///
/// # Returns
/// A ready connection pool, or `DomainError::Database` if the database is
/// unreachable within the configured timeout.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    tracing::info!(
        max_connections = config.max_connections,
        "connecting to database"
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to connect to database: {}", e),
        })
}
