//! Utility modules
//!
//! Provides logging setup: a rotating log file for native builds, and a
//! line-per-event writer the browser build points at the developer console.

pub mod line_writer;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use line_writer::LineMakeWriter;
#[cfg(not(target_arch = "wasm32"))]
pub use logging::init_logging;
