//! Configuration management module
//!
//! This module handles loading, saving, and validating carousel configuration.
//! Configuration is stored in `<data dir>/config.json` with atomic writes
//! to prevent corruption.

#[cfg(not(target_arch = "wasm32"))]
pub mod manager;
pub mod models;

#[cfg(not(target_arch = "wasm32"))]
pub use manager::ConfigManager;
pub use models::{CarouselConfig, Selectors};
