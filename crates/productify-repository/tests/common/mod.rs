//! Common test infrastructure for database integration tests.

use productify_config::DatabaseConfig;
use productify_core::{Category, EntityId};
use productify_repository::{CategoryRepository, DatabasePool, Repository};
use std::sync::Arc;

/// Migrated in-memory database, private to one test.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database and runs migrations.
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open in-memory database");
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Inserts a category and returns its identity.
    pub async fn seed_category(&self, name: &str) -> EntityId {
        let repo = CategoryRepository::new(self.pool());
        let mut category = Category::new(name);
        repo.add(&mut category)
            .await
            .expect("Failed to seed category");
        category.id
    }
}
