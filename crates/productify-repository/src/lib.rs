//! # Productify Repository
//!
//! Persistence gateway over a relational store:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn Repository<T>>   (generic gateway interface)
//! SqliteRepository<T>           (one implementation for every entity)
//!   ↓  SqlEntity                (per-entity table binding)
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
