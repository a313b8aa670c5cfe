//! `hero-carousel` - Rotating hero image carousel for a landing page
//!
//! A small, host-independent state machine that cycles slides, keeps exactly
//! one slide and its indicator active, runs a single autoplay timer that
//! pauses on hover and when the page is hidden, and reacts to controls,
//! arrow keys and touch swipes.
//!
//! `CarouselController` owns all state. It talks to its environment through
//! `CarouselHost` (node discovery, active-state toggling, listener
//! subscriptions) and `AutoplayScheduler` (one recurring timer), and receives
//! input as `CarouselEvent`s.
//!
//! # Hosts
//!
//! - `host::MemoryHost`: in-memory structure, used headless and in tests
//! - `web` (wasm32 only): the browser DOM through `web-sys`

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod scheduler;

pub mod utils;

// Browser bindings (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::CarouselConfig;
pub use controller::{CarouselController, CarouselEvent, HeroCarousel, Key};
pub use error::{CarouselError, Result};
