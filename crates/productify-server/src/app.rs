//! Application wiring.
//!
//! Every dependency is built here by hand and shared through `Arc`:
//! gateways over the pool, one generic service per entity, and the
//! authentication service, all collected into the REST [`AppState`].

use axum::Router;
use productify_config::AppConfig;
use productify_core::{Category, Product};
use productify_repository::{CategoryRepository, DatabasePool, ProductRepository, Repository};
use productify_rest::{create_router, AppState};
use productify_service::{
    AuthService, AuthServiceImpl, CategoryDto, CategoryService, CreateCategoryDto,
    CreateProductDto, GenericEntityService, ProductDto, ProductService, UpdateCategoryDto,
    UpdateProductDto,
};
use std::sync::Arc;
use tracing::info;

/// Builds the shared handler state over an open pool.
pub fn build_state(pool: Arc<DatabasePool>, config: &AppConfig) -> AppState {
    let category_repository: Arc<dyn Repository<Category>> =
        Arc::new(CategoryRepository::new(Arc::clone(&pool)));
    let product_repository: Arc<dyn Repository<Product>> =
        Arc::new(ProductRepository::new(pool));

    let category_service: Arc<CategoryService> = Arc::new(GenericEntityService::<
        Category,
        CategoryDto,
        CreateCategoryDto,
        UpdateCategoryDto,
    >::new(category_repository));
    let product_service: Arc<ProductService> = Arc::new(GenericEntityService::<
        Product,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
    >::new(product_repository));

    let auth_service: Arc<dyn AuthService> =
        Arc::new(AuthServiceImpl::new(Arc::new(config.security.clone())));

    info!("Application services wired");
    AppState::new(category_service, product_service, auth_service)
}

/// Builds the complete HTTP application.
pub fn build_app(pool: Arc<DatabasePool>, config: &AppConfig) -> Router {
    create_router(build_state(pool, config), &config.server)
}
