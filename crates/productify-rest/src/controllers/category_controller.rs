//! Category endpoints.

use super::entity_controller::{self, EntityResource};
use crate::state::AppState;
use productify_service::{
    CategoryDto, CreateCategoryDto, EntityService, UpdateCategoryDto,
};
use axum::Router;
use std::sync::Arc;

/// Mount point of the category endpoints.
pub const PATH: &str = "/api/category";

/// The category resource.
pub struct Categories;

impl EntityResource for Categories {
    type Dto = CategoryDto;
    type Create = CreateCategoryDto;
    type Update = UpdateCategoryDto;

    const NAME: &'static str = "Category";
    const PATH: &'static str = PATH;

    fn service(state: &AppState) -> Arc<dyn EntityService<CategoryDto, CreateCategoryDto, UpdateCategoryDto>> {
        Arc::clone(&state.category_service)
    }
}

/// Creates the category router.
pub fn router() -> Router<AppState> {
    entity_controller::router::<Categories>()
}
