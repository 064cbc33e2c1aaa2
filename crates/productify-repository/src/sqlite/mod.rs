//! SQLite persistence gateway.
//!
//! [`SqliteRepository`] is written once; each entity contributes only its
//! table binding through [`SqlEntity`].

mod category;
mod product;

pub use category::CategoryRow;
pub use product::ProductRow;

use crate::{traits::Repository, DatabasePool};
use async_trait::async_trait;
use productify_core::{Entity, EntityId, PageRange, ProductifyError, ProductifyResult};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A query with positional parameters still being bound.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Table binding for an entity persisted in SQLite.
pub trait SqlEntity: Entity + Sized + 'static {
    /// Row shape returned by [`SqlEntity::SELECT`].
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    /// Table holding the records.
    const TABLE: &'static str;

    /// Projection producing [`SqlEntity::Row`], without filtering or ordering.
    const SELECT: &'static str;

    /// Identity column as it must be referenced inside [`SqlEntity::SELECT`].
    const ID_COLUMN: &'static str;

    /// Insert statement; placeholders match [`SqlEntity::bind_fields`].
    const INSERT: &'static str;

    /// Update statement; placeholders match [`SqlEntity::bind_fields`]
    /// followed by the identity.
    const UPDATE: &'static str;

    /// Rebuilds the entity from a fetched row.
    fn from_row(row: Self::Row) -> ProductifyResult<Self>;

    /// Binds every persisted column except the identity.
    fn bind_fields<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// Generic SQLite repository.
pub struct SqliteRepository<T> {
    pool: Arc<DatabasePool>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: SqlEntity> SqliteRepository<T> {
    /// Creates a new repository over the shared pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: SqlEntity> Repository<T> for SqliteRepository<T> {
    async fn get_range(&self, range: PageRange) -> ProductifyResult<Vec<T>> {
        debug!(
            "Fetching {} records from {}: skip {}, take {}",
            T::RESOURCE,
            T::TABLE,
            range.skip,
            range.take
        );

        let sql = format!("{} ORDER BY {} LIMIT ? OFFSET ?", T::SELECT, T::ID_COLUMN);
        let rows = sqlx::query_as::<_, T::Row>(&sql)
            .bind(range.limit())
            .bind(range.offset())
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(T::from_row).collect()
    }

    async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<T>> {
        debug!("Finding {} by id: {}", T::RESOURCE, id);

        let sql = format!("{} WHERE {} = ?", T::SELECT, T::ID_COLUMN);
        let row = sqlx::query_as::<_, T::Row>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(T::from_row).transpose()
    }

    async fn exists(&self, id: EntityId) -> ProductifyResult<bool> {
        let sql = format!("SELECT COUNT(1) FROM {} WHERE id = ?", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(id.into_inner())
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count > 0)
    }

    async fn add(&self, entity: &mut T) -> ProductifyResult<()> {
        let result = entity
            .bind_fields(sqlx::query(T::INSERT))
            .execute(self.pool.inner())
            .await?;

        entity.assign_id(EntityId::new(result.last_insert_rowid()));
        debug!("Inserted {} with id: {}", T::RESOURCE, entity.id());
        Ok(())
    }

    async fn update(&self, entity: &T) -> ProductifyResult<()> {
        let id = entity.id();
        debug!("Updating {}: {}", T::RESOURCE, id);

        let result = entity
            .bind_fields(sqlx::query(T::UPDATE))
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductifyError::Database(format!(
                "No {} row with id {} to update",
                T::RESOURCE,
                id
            )));
        }
        Ok(())
    }

    async fn delete(&self, entity: &T) -> ProductifyResult<()> {
        let id = entity.id();
        debug!("Deleting {}: {}", T::RESOURCE, id);

        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductifyError::Database(format!(
                "No {} row with id {} to delete",
                T::RESOURCE,
                id
            )));
        }
        Ok(())
    }
}

/// Gateway for categories.
pub type CategoryRepository = SqliteRepository<productify_core::Category>;

/// Gateway for products.
pub type ProductRepository = SqliteRepository<productify_core::Product>;
