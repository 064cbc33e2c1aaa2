//! Category DTOs.

use productify_core::{EntityId, Identifiable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public view of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: EntityId,
    pub name: String,
}

/// Create category request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(
        custom(function = "productify_core::rules::not_blank", message = "The name is required."),
        length(max = 100, message = "The name must not exceed 100 characters.")
    )]
    pub name: String,
}

/// Update category request. Replaces every field of the addressed category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(custom(function = "productify_core::rules::assigned", message = "A valid id is required."))]
    pub id: EntityId,

    #[validate(
        custom(function = "productify_core::rules::not_blank", message = "The name is required."),
        length(max = 100, message = "The name must not exceed 100 characters.")
    )]
    pub name: String,
}

impl Identifiable for UpdateCategoryDto {
    fn id(&self) -> EntityId {
        self.id
    }
}
