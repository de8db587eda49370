// src/config/mod.rs

//! Configuration for dirwatch.
//!
//! Responsibilities:
//! - Define the immutable watch settings (`model.rs`).
//! - Validate basic invariants like a non-zero poll interval (`validate.rs`).

pub mod model;
pub mod validate;

pub use model::WatchConfig;
pub use validate::validate_config;
