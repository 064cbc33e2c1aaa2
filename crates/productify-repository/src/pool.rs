//! Database connection pool management.

use productify_config::DatabaseConfig;
use productify_core::{ProductifyError, ProductifyResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Database pool wrapper.
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// An in-memory database lives only as long as its connection, so it is
    /// pinned to a single connection that is never recycled.
    pub async fn new(config: &DatabaseConfig) -> ProductifyResult<Self> {
        info!("Connecting to SQLite database...");

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| ProductifyError::Configuration(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(config.connect_timeout());

        pool_options = if is_in_memory(&config.url) {
            pool_options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .idle_timeout(Some(config.idle_timeout()))
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            ProductifyError::Database(format!("Failed to connect: {e}"))
        })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> ProductifyResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ProductifyError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> ProductifyResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ProductifyError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> ProductifyResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://shared?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://productify.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_health_check_and_migrations() {
        let pool = create_pool(&memory_config()).await.unwrap();
        pool.health_check().await.unwrap();
        pool.run_migrations().await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'products')",
        )
        .fetch_one(pool.inner())
        .await
        .unwrap();
        assert_eq!(tables, 2);
        pool.close().await;
    }
}
