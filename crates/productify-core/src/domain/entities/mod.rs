//! Domain entities.

mod category;
mod product;

pub use category::*;
pub use product::*;
