//! Configuration data models
//!
//! This module defines the data structures used for carousel configuration.

use crate::error::{CarouselError, Result, StringError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level carousel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Delay between automatic advances in milliseconds
    pub autoplay_interval_ms: u64,
    /// Horizontal travel in pixels a touch must strictly exceed to count as a swipe
    pub swipe_threshold_px: f64,
    /// CSS selectors used by the browser host
    pub selectors: Selectors,
}

/// CSS selectors locating the carousel structure in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// The carousel container
    pub container: String,
    /// Slides, relative to the container
    pub slide: String,
    /// Indicators, relative to the container
    pub indicator: String,
    /// Previous control, relative to the container
    pub prev: String,
    /// Next control, relative to the container
    pub next: String,
    /// Class toggled on the active slide and indicator
    pub active_class: String,
}

impl CarouselConfig {
    /// Autoplay interval as a `Duration`
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Reject values the controller cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::ConfigError(StringError::new(
                "autoplay_interval_ms must be greater than zero",
            )));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(CarouselError::ConfigError(StringError::new(format!(
                "swipe_threshold_px must be a non-negative number, got {}",
                self.swipe_threshold_px
            ))));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            swipe_threshold_px: 50.0,
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: ".hero-carousel".to_string(),
            slide: ".carousel-slide".to_string(),
            indicator: ".indicator".to_string(),
            prev: ".carousel-prev".to_string(),
            next: ".carousel-next".to_string(),
            active_class: "active".to_string(),
        }
    }
}
