//! Generic entity service implementation.

use crate::entity_service::EntityService;
use async_trait::async_trait;
use productify_core::{
    ApplyTo, Entity, EntityId, Identifiable, PageRange, ProductifyError, ProductifyResult,
    ValidateExt,
};
use productify_repository::Repository;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// The single CRUD pipeline shared by every entity type.
///
/// `T` is the persisted entity; `D`, `C` and `U` are its read view, create
/// request and update request.
pub struct GenericEntityService<T, D, C, U> {
    repository: Arc<dyn Repository<T>>,
    _dtos: PhantomData<fn() -> (D, C, U)>,
}

impl<T: Entity, D, C, U> GenericEntityService<T, D, C, U> {
    /// Creates a new service over the given gateway.
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self {
            repository,
            _dtos: PhantomData,
        }
    }

    async fn require(&self, id: EntityId) -> ProductifyResult<T> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductifyError::not_found(T::RESOURCE, id))
    }
}

#[async_trait]
impl<T, D, C, U> EntityService<D, C, U> for GenericEntityService<T, D, C, U>
where
    T: Entity + From<C> + 'static,
    D: From<T> + Send + 'static,
    C: Validate + Send + 'static,
    U: Validate + Identifiable + ApplyTo<T> + Send + 'static,
{
    async fn get_all(&self, range: PageRange) -> ProductifyResult<Vec<D>> {
        debug!(
            "Listing {}: skip {}, take {}",
            T::RESOURCE,
            range.skip,
            range.take
        );

        let entities = self.repository.get_range(range).await?;
        Ok(entities.into_iter().map(D::from).collect())
    }

    async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<D>> {
        debug!("Getting {}: {}", T::RESOURCE, id);

        Ok(self.repository.get_by_id(id).await?.map(D::from))
    }

    async fn add(&self, dto: C) -> ProductifyResult<EntityId> {
        debug!("Creating {}", T::RESOURCE);

        dto.validate_request()?;

        let mut entity = T::from(dto);
        self.repository.add(&mut entity).await?;

        let id = entity.id();
        info!("{} created: {}", T::RESOURCE, id);
        Ok(id)
    }

    async fn update(&self, dto: U) -> ProductifyResult<()> {
        let id = dto.id();
        debug!("Updating {}: {}", T::RESOURCE, id);

        dto.validate_request()?;

        let mut entity = self.require(id).await?;
        dto.apply_to(&mut entity);
        self.repository.update(&entity).await?;

        info!("{} updated: {}", T::RESOURCE, id);
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> ProductifyResult<()> {
        debug!("Deleting {}: {}", T::RESOURCE, id);

        let entity = self.require(id).await?;
        self.repository.delete(&entity).await?;

        info!("{} deleted: {}", T::RESOURCE, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{
        CategoryDto, CreateCategoryDto, CreateProductDto, ProductDto, UpdateCategoryDto,
        UpdateProductDto,
    };
    use mockall::mock;
    use productify_core::{Category, Product};
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory gateway; the `BTreeMap` keeps store order by identity.
    struct InMemoryRepository<T> {
        rows: Mutex<BTreeMap<EntityId, T>>,
        next_id: Mutex<i64>,
    }

    impl<T: Entity + Clone> InMemoryRepository<T> {
        fn new() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl<T: Entity + Clone + 'static> Repository<T> for InMemoryRepository<T> {
        async fn get_range(&self, range: PageRange) -> ProductifyResult<Vec<T>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .skip(usize::try_from(range.skip).unwrap_or(usize::MAX))
                .take(range.take as usize)
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<T>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn exists(&self, id: EntityId) -> ProductifyResult<bool> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        async fn add(&self, entity: &mut T) -> ProductifyResult<()> {
            let mut next_id = self.next_id.lock().unwrap();
            entity.assign_id(EntityId::new(*next_id));
            *next_id += 1;
            self.rows.lock().unwrap().insert(entity.id(), entity.clone());
            Ok(())
        }

        async fn update(&self, entity: &T) -> ProductifyResult<()> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&entity.id()) {
                Some(row) => {
                    *row = entity.clone();
                    Ok(())
                }
                None => Err(ProductifyError::Database("no such row".to_string())),
            }
        }

        async fn delete(&self, entity: &T) -> ProductifyResult<()> {
            self.rows
                .lock()
                .unwrap()
                .remove(&entity.id())
                .map(|_| ())
                .ok_or_else(|| ProductifyError::Database("no such row".to_string()))
        }
    }

    mock! {
        CategoryRepo {}

        #[async_trait]
        impl Repository<Category> for CategoryRepo {
            async fn get_range(&self, range: PageRange) -> ProductifyResult<Vec<Category>>;
            async fn get_by_id(&self, id: EntityId) -> ProductifyResult<Option<Category>>;
            async fn exists(&self, id: EntityId) -> ProductifyResult<bool>;
            async fn add(&self, entity: &mut Category) -> ProductifyResult<()>;
            async fn update(&self, entity: &Category) -> ProductifyResult<()>;
            async fn delete(&self, entity: &Category) -> ProductifyResult<()>;
        }
    }

    type Categories = GenericEntityService<Category, CategoryDto, CreateCategoryDto, UpdateCategoryDto>;
    type Products = GenericEntityService<Product, ProductDto, CreateProductDto, UpdateProductDto>;

    fn category_service() -> (Arc<InMemoryRepository<Category>>, Categories) {
        let repo = Arc::new(InMemoryRepository::new());
        let service = Categories::new(repo.clone());
        (repo, service)
    }

    fn create_category(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_all_respects_range() {
        let (_, service) = category_service();
        for name in ["A", "B", "C", "D", "E"] {
            service.add(create_category(name)).await.unwrap();
        }

        let page = service.get_all(PageRange::new(1, 3).unwrap()).await.unwrap();
        let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);

        let empty = service.get_all(PageRange::new(5, 3).unwrap()).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let (_, service) = category_service();
        let result = service.get_by_id(EntityId::new(7)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_add_round_trip() {
        let (_, service) = category_service();

        let id = service.add(create_category("Electronics")).await.unwrap();
        assert!(id.is_assigned());

        let found = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            found,
            CategoryDto {
                id,
                name: "Electronics".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_add_returns_distinct_identities() {
        let (repo, service) = category_service();
        let first = service.add(create_category("Same")).await.unwrap();
        let second = service.add(create_category("Same")).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_add_invalid_dto_never_reaches_store() {
        let (repo, service) = category_service();

        let err = service.add(create_category("  ")).await.unwrap_err();
        assert!(matches!(err, ProductifyError::Validation(_)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_store_unchanged() {
        let (repo, service) = category_service();
        let id = service.add(create_category("Electronics")).await.unwrap();

        let err = service
            .update(UpdateCategoryDto {
                id: EntityId::new(99),
                name: "Ghost".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(repo.len(), 1);
        assert_eq!(service.get_by_id(id).await.unwrap().unwrap().name, "Electronics");
    }

    #[tokio::test]
    async fn test_update_overlays_fields() {
        let (_, service) = category_service();
        let id = service.add(create_category("Electronics")).await.unwrap();

        service
            .update(UpdateCategoryDto {
                id,
                name: "Gadgets".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(service.get_by_id(id).await.unwrap().unwrap().name, "Gadgets");
    }

    #[tokio::test]
    async fn test_delete_then_absent() {
        let (_, service) = category_service();
        let id = service.add(create_category("Electronics")).await.unwrap();

        service.delete(id).await.unwrap();
        assert!(service.get_by_id(id).await.unwrap().is_none());

        let err = service.delete(id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_product_scenario() {
        let repo = Arc::new(InMemoryRepository::<Product>::new());
        let service = Products::new(repo.clone());

        let id = service
            .add(CreateProductDto {
                name: "Gadget".to_string(),
                price: Decimal::new(10, 0),
                category_id: EntityId::new(1),
            })
            .await
            .unwrap();

        let found = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Gadget");
        assert_eq!(found.price, Decimal::new(10, 0));
        assert_eq!(found.category_name, "");

        service
            .update(UpdateProductDto {
                id,
                name: "Gadget2".to_string(),
                price: Decimal::new(10, 0),
                category_id: EntityId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(service.get_by_id(id).await.unwrap().unwrap().name, "Gadget2");
    }

    #[tokio::test]
    async fn test_delete_missing_does_not_touch_gateway() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .withf(|id| *id == EntityId::new(3))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = Categories::new(Arc::new(repo));
        let err = service.delete(EntityId::new(3)).await.unwrap_err();
        assert!(matches!(
            err,
            ProductifyError::NotFound { resource_type: "Category", .. }
        ));
    }

    #[tokio::test]
    async fn test_store_error_propagates_unchanged() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(Category::with_id(id, "Electronics"))));
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(ProductifyError::Constraint("FOREIGN KEY constraint failed".to_string())));

        let service = Categories::new(Arc::new(repo));
        let err = service.delete(EntityId::new(1)).await.unwrap_err();
        assert!(err.is_store_error());
        assert_eq!(err.status_code(), 409);
    }
}
