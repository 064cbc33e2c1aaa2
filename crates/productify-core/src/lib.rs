//! # Productify Core
//!
//! Core types, traits, and error definitions for Productify.
//! This crate provides the foundational abstractions shared by the
//! repository, service and REST layers: the error taxonomy, typed
//! identities, range pagination, the entity capability traits, and the
//! Category/Product domain entities.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
