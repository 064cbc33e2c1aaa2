//! Category entity.

use crate::{Entity, EntityId, Identifiable};
use serde::{Deserialize, Serialize};

/// A named group of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identity.
    pub id: EntityId,

    /// Display name.
    pub name: String,
}

impl Category {
    /// Creates a category that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            name: name.into(),
        }
    }

    /// Rebuilds a persisted category.
    #[must_use]
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Category {
    const RESOURCE: &'static str = "Category";

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
