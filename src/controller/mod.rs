//! Carousel controller module
//!
//! This module implements the carousel state machine: index cycling,
//! autoplay timer lifecycle, and input handling.
//!
//! # Overview
//!
//! The controller is the single owner of carousel state. It:
//! - **Discovers** slides, indicators and controls once at mount
//! - **Renders** by toggling the active state of exactly one slide and the
//!   indicator paired with it
//! - **Schedules** at most one recurring autoplay timer
//! - **Reacts** to [`CarouselEvent`]s delivered by its host, one at a time
//!
//! # Event Flow
//!
//! ```text
//! Host listeners ──┐
//!                  ├─> CarouselEvent ─> CarouselController ─> set_active()
//! Autoplay timer ──┘                           │
//!                                              └─> schedule()/cancel()
//! ```
//!
//! # Navigation and autoplay
//!
//! Every manual navigation (`next`, `prev`, `go_to_slide`, swipe, arrow keys)
//! cancels the live timer and schedules a fresh one, so the user always gets
//! a full interval before the next automatic advance. Ticks call `next()`
//! and therefore restart the interval the same way.
//!
//! Hover and page visibility pause and resume autoplay. Resume only schedules
//! when no timer is live.

pub mod carousel_controller;
pub mod swipe;

pub use carousel_controller::{CarouselController, HeroCarousel};
pub use swipe::{SwipeDirection, SwipeTracker};

use crate::scheduler::TimerId;

/// Keys the carousel distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Input delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Previous control activated
    PrevActivated,
    /// Next control activated
    NextActivated,
    /// Indicator at the given position activated
    IndicatorActivated(usize),
    /// Key pressed anywhere in the document
    KeyDown(Key),
    /// Touch started on the container at horizontal position `x`
    TouchStart {
        /// Client X coordinate in pixels
        x: f64,
    },
    /// Touch ended on the container at horizontal position `x`
    TouchEnd {
        /// Client X coordinate in pixels
        x: f64,
    },
    /// Pointer entered the container
    PointerEnter,
    /// Pointer left the container
    PointerLeave,
    /// Page visibility changed
    VisibilityChanged {
        /// Whether the page is now hidden
        hidden: bool,
    },
    /// An autoplay timer fired
    AutoplayTick(TimerId),
}
