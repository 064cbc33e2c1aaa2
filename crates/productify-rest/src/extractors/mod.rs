//! Custom Axum extractors.

mod claims;
mod json;
mod pagination;

pub use claims::*;
pub use json::*;
pub use pagination::*;
