//! Manually clocked autoplay timer
//!
//! Time only moves when [`ManualScheduler::advance`] is called, which makes
//! autoplay behaviour reproducible. Clones share one clock, so a caller can
//! keep a clone while the controller owns another.

use super::{AutoplayScheduler, TimerId};
use crate::controller::CarouselEvent;
use crate::error::{CarouselError, Result, StringError};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Handle of a timer on a [`ManualScheduler`]
#[derive(Debug, PartialEq, Eq)]
pub struct ManualTimer(u64);

#[derive(Debug)]
struct Entry {
    key: u64,
    id: TimerId,
    interval: Duration,
    next_fire: Duration,
}

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_key: u64,
    entries: Vec<Entry>,
    schedule_count: usize,
    fail_next: bool,
}

/// Autoplay scheduler driven by an explicit virtual clock
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with no timers
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of timers currently scheduled
    pub fn active_timers(&self) -> usize {
        self.clock.lock().entries.len()
    }

    /// Total number of successful `schedule` calls so far
    pub fn schedule_count(&self) -> usize {
        self.clock.lock().schedule_count
    }

    /// Make the next `schedule` call fail
    pub fn fail_next_schedule(&self) {
        self.clock.lock().fail_next = true;
    }

    /// Move the clock forward and return the ticks that came due, in firing order
    ///
    /// A timer whose interval elapses several times within `by` fires once per
    /// elapsed interval.
    pub fn advance(&self, by: Duration) -> Vec<CarouselEvent> {
        let mut clock = self.clock.lock();
        let target = clock.now + by;
        let mut fired = Vec::new();

        while let Some(entry) = clock
            .entries
            .iter_mut()
            .filter(|e| e.next_fire <= target)
            .min_by_key(|e| (e.next_fire, e.key))
        {
            fired.push(CarouselEvent::AutoplayTick(entry.id));
            entry.next_fire += entry.interval;
        }

        clock.now = target;
        fired
    }
}

impl AutoplayScheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&mut self, id: TimerId, interval: Duration) -> Result<ManualTimer> {
        let mut clock = self.clock.lock();
        if std::mem::take(&mut clock.fail_next) {
            return Err(CarouselError::TimerFailed(StringError::new(
                "timer facility unavailable",
            )));
        }
        if interval.is_zero() {
            return Err(CarouselError::TimerFailed(StringError::new(
                "autoplay interval must be non-zero",
            )));
        }

        let key = clock.next_key;
        clock.next_key += 1;
        let next_fire = clock.now + interval;
        clock.entries.push(Entry {
            key,
            id,
            interval,
            next_fire,
        });
        clock.schedule_count += 1;
        Ok(ManualTimer(key))
    }

    fn cancel(&mut self, handle: ManualTimer) {
        self.clock.lock().entries.retain(|e| e.key != handle.0);
    }
}
