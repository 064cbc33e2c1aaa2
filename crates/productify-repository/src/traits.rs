//! Repository trait definitions.

use async_trait::async_trait;
use productify_core::{Entity, EntityId, PageRange, ProductifyResult};

/// Generic persistence gateway, scoped to one entity type.
///
/// Every mutating call commits on its own; no transaction spans calls.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Returns up to `range.take` records after skipping `range.skip`.
    async fn get_range(&self, range: PageRange) -> ProductifyResult<Vec<T>>;

    /// Finds a record by identity.
    async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<T>>;

    /// Checks whether a record with this identity exists.
    async fn exists(&self, id: EntityId) -> ProductifyResult<bool>;

    /// Inserts a new record and assigns the store-generated identity to `entity`.
    async fn add(&self, entity: &mut T) -> ProductifyResult<()>;

    /// Replaces the record matching the entity's identity.
    async fn update(&self, entity: &T) -> ProductifyResult<()>;

    /// Removes the record matching the entity's identity.
    async fn delete(&self, entity: &T) -> ProductifyResult<()>;
}
