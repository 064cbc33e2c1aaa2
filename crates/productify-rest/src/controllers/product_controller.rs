//! Product endpoints.

use super::entity_controller::{self, EntityResource};
use crate::state::AppState;
use productify_service::{CreateProductDto, EntityService, ProductDto, UpdateProductDto};
use axum::Router;
use std::sync::Arc;

/// Mount point of the product endpoints.
pub const PATH: &str = "/api/product";

/// The product resource.
pub struct Products;

impl EntityResource for Products {
    type Dto = ProductDto;
    type Create = CreateProductDto;
    type Update = UpdateProductDto;

    const NAME: &'static str = "Product";
    const PATH: &'static str = PATH;

    fn service(state: &AppState) -> Arc<dyn EntityService<ProductDto, CreateProductDto, UpdateProductDto>> {
        Arc::clone(&state.product_service)
    }
}

/// Creates the product router.
pub fn router() -> Router<AppState> {
    entity_controller::router::<Products>()
}
