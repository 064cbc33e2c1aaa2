//! # Productify Service
//!
//! One generic CRUD pipeline, reused for every entity, that maps between
//! the public DTO shapes and the persisted entities.

pub mod auth_service;
pub mod dto;
pub mod entity_service;
pub mod r#impl;
pub mod mappers;

pub use auth_service::*;
pub use dto::*;
pub use entity_service::*;
pub use r#impl::GenericEntityService;
