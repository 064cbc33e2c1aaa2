//! # Productify REST
//!
//! REST API layer using Axum for Productify.
//! Provides the category and product endpoints, login, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
