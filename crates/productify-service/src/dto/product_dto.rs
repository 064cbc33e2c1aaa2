//! Product DTOs.

use productify_core::{EntityId, Identifiable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public view of a product.
///
/// `category_name` is empty when the owning category was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: EntityId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_name: String,
}

/// Create product request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(
        custom(function = "productify_core::rules::not_blank", message = "The product name is required"),
        length(max = 100, message = "The name must not exceed 100 characters.")
    )]
    pub name: String,

    #[validate(custom(function = "productify_core::rules::positive", message = "Product price must be greater than 0"))]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[validate(custom(function = "productify_core::rules::assigned", message = "A valid category is required."))]
    pub category_id: EntityId,
}

/// Update product request. Replaces every field of the addressed product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(custom(function = "productify_core::rules::assigned", message = "A valid id is required."))]
    pub id: EntityId,

    #[validate(
        custom(function = "productify_core::rules::not_blank", message = "The product name is required"),
        length(max = 100, message = "The name must not exceed 100 characters.")
    )]
    pub name: String,

    #[validate(custom(function = "productify_core::rules::positive", message = "Product price must be greater than 0"))]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[validate(custom(function = "productify_core::rules::assigned", message = "A valid category is required."))]
    pub category_id: EntityId,
}

impl Identifiable for UpdateProductDto {
    fn id(&self) -> EntityId {
        self.id
    }
}
