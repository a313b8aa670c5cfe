//! Background-thread autoplay timer
//!
//! Each scheduled timer owns one thread that waits on a cancellation channel
//! with the autoplay interval as timeout. A timeout means the interval
//! elapsed: a tick is sent to the event loop. Dropping the handle disconnects
//! the channel and the thread exits on its next wake-up, which is immediate.

use super::{AutoplayScheduler, TimerId};
use crate::controller::CarouselEvent;
use crate::error::{CarouselError, Result, StringError};
use std::sync::mpsc::{self, RecvTimeoutError, TrySendError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Autoplay scheduler backed by one thread per timer
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    /// Channel to the application event loop
    event_sender: mpsc::SyncSender<CarouselEvent>,
}

/// Handle of a running timer thread; dropping it stops the thread
#[derive(Debug)]
pub struct ThreadTimer {
    id: TimerId,
    _cancel: mpsc::Sender<()>,
}

impl ThreadTimer {
    /// Identity carried by this timer's ticks
    pub fn id(&self) -> TimerId {
        self.id
    }
}

impl ThreadScheduler {
    /// Create a scheduler delivering ticks into `event_sender`
    pub fn new(event_sender: mpsc::SyncSender<CarouselEvent>) -> Self {
        Self { event_sender }
    }
}

impl AutoplayScheduler for ThreadScheduler {
    type Handle = ThreadTimer;

    fn schedule(&mut self, id: TimerId, interval: Duration) -> Result<ThreadTimer> {
        if interval.is_zero() {
            return Err(CarouselError::TimerFailed(StringError::new(
                "autoplay interval must be non-zero",
            )));
        }

        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let sender = self.event_sender.clone();

        thread::Builder::new()
            .name(format!("autoplay-{id}"))
            .spawn(move || {
                loop {
                    match cancel_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            // Never block the timer on a full queue; the
                            // event loop is behind and a dropped tick is harmless.
                            match sender.try_send(CarouselEvent::AutoplayTick(id)) {
                                Ok(()) => {}
                                Err(TrySendError::Full(_)) => {
                                    warn!("Event queue full, dropping autoplay tick {id}");
                                }
                                Err(TrySendError::Disconnected(_)) => {
                                    debug!("Event loop gone, stopping autoplay timer {id}");
                                    break;
                                }
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("Autoplay timer {id} stopped");
            })
            .map_err(|e| CarouselError::TimerFailed(Box::new(e)))?;

        Ok(ThreadTimer {
            id,
            _cancel: cancel_tx,
        })
    }

    fn cancel(&mut self, handle: ThreadTimer) {
        debug!("Cancelling autoplay timer {}", handle.id);
        drop(handle);
    }
}
