//! Generic entity service trait definition.

use crate::dto::{
    CategoryDto, CreateCategoryDto, CreateProductDto, ProductDto, UpdateCategoryDto,
    UpdateProductDto,
};
use async_trait::async_trait;
use productify_core::{EntityId, PageRange, ProductifyResult};

/// Uniform CRUD contract over one entity type, expressed in its DTO shapes.
///
/// * `D` - the read view
/// * `C` - the create request
/// * `U` - the update request, which carries the target identity
#[async_trait]
pub trait EntityService<D, C, U>: Send + Sync
where
    D: Send + 'static,
    C: Send + 'static,
    U: Send + 'static,
{
    /// Lists a window of records in store order.
    async fn get_all(&self, range: PageRange) -> ProductifyResult<Vec<D>>;

    /// Gets a record by identity. Absence is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<D>>;

    /// Creates a record and returns the identity the store assigned.
    async fn add(&self, dto: C) -> ProductifyResult<EntityId>;

    /// Replaces the record addressed by `dto`.
    ///
    /// Fails with `NotFound` when no such record exists.
    async fn update(&self, dto: U) -> ProductifyResult<()>;

    /// Deletes a record.
    ///
    /// Fails with `NotFound` when no such record exists.
    async fn delete(&self, id: EntityId) -> ProductifyResult<()>;
}

/// Category operations.
pub type CategoryService = dyn EntityService<CategoryDto, CreateCategoryDto, UpdateCategoryDto>;

/// Product operations.
pub type ProductService = dyn EntityService<ProductDto, CreateProductDto, UpdateProductDto>;
