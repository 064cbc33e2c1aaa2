//! Application state for Axum handlers.

use productify_service::{AuthService, CategoryService, ProductService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        category_service: Arc<CategoryService>,
        product_service: Arc<ProductService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            category_service,
            product_service,
            auth_service,
        }
    }
}
