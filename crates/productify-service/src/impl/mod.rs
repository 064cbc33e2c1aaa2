//! Service implementations.
//!
//! Trait definitions live in the parent module (`entity_service.rs`).

pub mod generic_entity_service;

pub use generic_entity_service::GenericEntityService;
