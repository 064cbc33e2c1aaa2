//! Product entity.

use super::Category;
use crate::{Entity, EntityId, Identifiable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced item that belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identity.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Unit price, strictly positive.
    pub price: Decimal,

    /// Owning category.
    pub category_id: EntityId,

    /// The owning category, when the store loaded it alongside the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, category_id: EntityId) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            name: name.into(),
            price,
            category_id,
            category: None,
        }
    }

    /// Name of the loaded category, if any.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Points the product at another category.
    ///
    /// A loaded relation that no longer matches is dropped.
    pub fn move_to(&mut self, category_id: EntityId) {
        if self.category_id != category_id {
            self.category_id = category_id;
            self.category = None;
        }
    }
}

impl Identifiable for Product {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Product {
    const RESOURCE: &'static str = "Product";

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
