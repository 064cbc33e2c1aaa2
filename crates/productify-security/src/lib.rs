//! # Productify Security
//!
//! JWT bearer tokens for the write endpoints.

pub mod jwt;

pub use jwt::*;
