//! Autoplay timer module
//!
//! This module provides the timer facility behind carousel autoplay.
//!
//! # Overview
//!
//! - **One recurring timer** per carousel, scheduled and cancelled by the
//!   controller only
//! - **Tagged ticks**: every schedule gets a fresh [`TimerId`]; firings are
//!   delivered as `CarouselEvent::AutoplayTick(id)` and ticks of a timer that
//!   is no longer live are discarded by the controller
//! - **Explicit state**: [`AutoplayState`] is either `Idle` or `Scheduled`,
//!   so "at most one timer" is carried by the type instead of a nullable handle
//!
//! # Backends
//!
//! - [`ThreadScheduler`]: background thread per timer, ticks sent over an
//!   `mpsc` channel to the application event loop
//! - [`ManualScheduler`]: virtual clock advanced explicitly by the caller
//! - `web::IntervalScheduler` (wasm32): `setInterval`/`clearInterval`
//!
//! # Lifecycle
//!
//! ```text
//!            start / resume (when Idle)
//!   Idle  ---------------------------------->  Scheduled{id}
//!    ^                                              |
//!    |            pause / cancel                    |
//!    +----------------------------------------------+
//!                 reset = cancel + schedule(id + 1)
//! ```

pub mod manual;
pub mod thread_scheduler;

pub use manual::{ManualScheduler, ManualTimer};
pub use thread_scheduler::{ThreadScheduler, ThreadTimer};

use crate::error::Result;
use std::fmt;
use std::time::Duration;

/// Identity of one scheduled autoplay timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TimerId(u64);

impl TimerId {
    /// The identifier following this one
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host timer facility used for autoplay
pub trait AutoplayScheduler {
    /// Handle of a live recurring timer
    type Handle;

    /// Schedule a recurring timer delivering `AutoplayTick(id)` every `interval`
    fn schedule(&mut self, id: TimerId, interval: Duration) -> Result<Self::Handle>;

    /// Cancel a timer returned by `schedule`
    fn cancel(&mut self, handle: Self::Handle);
}

/// Autoplay timer state
#[derive(Debug)]
pub enum AutoplayState<H> {
    /// No timer scheduled
    Idle,
    /// Exactly one timer scheduled
    Scheduled {
        /// Identity carried by this timer's ticks
        id: TimerId,
        /// Backend handle used to cancel it
        handle: H,
    },
}

impl<H> Default for AutoplayState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H> AutoplayState<H> {
    /// Whether a timer is currently scheduled
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }

    /// Identity of the live timer, if any
    pub fn timer_id(&self) -> Option<TimerId> {
        match self {
            Self::Idle => None,
            Self::Scheduled { id, .. } => Some(*id),
        }
    }

    /// Move out of the scheduled state, leaving `Idle` behind
    pub fn take(&mut self) -> Option<(TimerId, H)> {
        match std::mem::replace(self, Self::Idle) {
            Self::Idle => None,
            Self::Scheduled { id, handle } => Some((id, handle)),
        }
    }
}
