//! Data Transfer Objects (DTOs).

mod auth_dto;
mod category_dto;
mod product_dto;

pub use auth_dto::*;
pub use category_dto::*;
pub use product_dto::*;
