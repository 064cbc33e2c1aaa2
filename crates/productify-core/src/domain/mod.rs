//! # Productify Domain
//!
//! Persisted record shapes for the catalogue: categories and the products
//! that belong to them.

pub mod entities;

pub use entities::*;
