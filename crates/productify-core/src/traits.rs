//! Capability traits shared by every entity shape.

use crate::EntityId;

/// Anything that carries an entity identity: persisted entities and the
/// update DTOs that address them.
///
/// The generic service reads identities exclusively through this trait,
/// so no entity type registers a custom accessor.
pub trait Identifiable {
    /// Returns the identity.
    fn id(&self) -> EntityId;
}

/// A persisted record shape (Category, Product).
pub trait Entity: Identifiable + Send + Sync {
    /// Human-readable resource name used in errors and logs.
    const RESOURCE: &'static str;

    /// Records the identity the store assigned on insert.
    ///
    /// Called by the persistence gateway only; identities never change
    /// after the first assignment.
    fn assign_id(&mut self, id: EntityId);
}

/// Overlays the fields of a DTO onto an existing entity.
///
/// The entity's identity and any loaded relations that the DTO does not
/// describe are left to the implementor.
pub trait ApplyTo<T> {
    /// Copies this value's fields onto `target`.
    fn apply_to(self, target: &mut T);
}
