//! Typed identity for persisted entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Store-assigned integer identity of a Category or Product.
///
/// `EntityId::UNASSIGNED` (zero) marks an entity that has not been
/// persisted yet; the store hands out positive identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    /// Identity of an entity that has not been persisted.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates an identity from a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns true if the store has assigned this identity.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_identity() {
        assert!(!EntityId::UNASSIGNED.is_assigned());
        assert!(!EntityId::default().is_assigned());
        assert!(!EntityId::new(-3).is_assigned());
        assert!(EntityId::new(1).is_assigned());
    }

    #[test]
    fn test_identity_serializes_as_plain_integer() {
        let json = serde_json::to_string(&EntityId::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: EntityId = serde_json::from_str("12").unwrap();
        assert_eq!(back, EntityId::new(12));
    }
}
