//! Result type aliases for Productify.

use crate::ProductifyError;

/// A specialized `Result` type for Productify operations.
pub type ProductifyResult<T> = Result<T, ProductifyError>;
