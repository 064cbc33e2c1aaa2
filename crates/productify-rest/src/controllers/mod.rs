//! REST API controllers.

pub mod auth_controller;
pub mod category_controller;
pub mod entity_controller;
pub mod health_controller;
pub mod product_controller;

pub use entity_controller::EntityResource;
pub use health_controller::*;
