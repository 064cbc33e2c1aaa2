//! # Productify Server Library
//!
//! Wiring and startup utilities for the Productify server binary.
//! Integration tests build the same application through [`app::build_app`].

pub mod app;
pub mod startup;
