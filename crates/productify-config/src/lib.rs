//! # Productify Config
//!
//! Configuration management for Productify.
//! Supports layered configuration from files, a `.env` file and
//! environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
