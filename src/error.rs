//! Error types for the hero carousel
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so that a degraded
//! mount can be logged with its full cause.

use crate::host::Role;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the carousel
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The container holds no slide nodes
    #[error("carousel has no slides")]
    NoSlides,

    /// A required descendant node was not found in the container
    #[error("carousel element missing: {0}")]
    MissingElement(Role),

    /// Slides and indicators are not paired one to one
    #[error("carousel has {slides} slides but {indicators} indicators")]
    IndicatorMismatch {
        /// Number of slide nodes discovered
        slides: usize,
        /// Number of indicator nodes discovered
        indicators: usize,
    },

    /// The host timer facility refused to schedule the autoplay timer
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to schedule autoplay timer: {0}")]
    TimerFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The host refused to attach an event listener
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to attach event listener: {0}")]
    SubscriptionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Convert an error to a message suitable for an operator reading the console
/// or the log file.
pub fn get_user_friendly_error(error: &CarouselError) -> String {
    match error {
        CarouselError::NoSlides => "The carousel container has no slides.\n\n\
             The carousel stays inactive. Add at least one `.carousel-slide`\n\
             element inside the container."
            .to_string(),
        CarouselError::MissingElement(role) => {
            format!(
                "The carousel is missing its {role}.\n\n\
                 The carousel stays inactive; the rest of the page is unaffected."
            )
        }
        CarouselError::IndicatorMismatch { slides, indicators } => {
            format!(
                "The carousel has {slides} slides but {indicators} indicators.\n\n\
                 Each slide needs exactly one indicator, in the same order."
            )
        }
        CarouselError::TimerFailed(_) => "Autoplay could not be started.\n\n\
             Manual navigation still works."
            .to_string(),
        CarouselError::SubscriptionFailed(_) => "An input listener could not be attached.\n\n\
             Some controls may not respond."
            .to_string(),
        CarouselError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Default settings are used."
            .to_string(),
        CarouselError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        CarouselError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The carousel will use default settings."
            )
        }
    }
}
