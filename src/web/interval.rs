//! `setInterval`-based autoplay timer

use super::{Dispatcher, js_error};
use crate::controller::CarouselEvent;
use crate::error::{CarouselError, Result};
use crate::scheduler::{AutoplayScheduler, TimerId};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Autoplay scheduler using the window's interval timers
pub struct IntervalScheduler {
    window: Window,
    dispatcher: Dispatcher,
}

/// A live interval; cleared when dropped
pub struct IntervalHandle {
    window: Window,
    interval_id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval_id);
    }
}

impl IntervalScheduler {
    pub(crate) fn new(window: Window, dispatcher: Dispatcher) -> Self {
        Self { window, dispatcher }
    }
}

impl AutoplayScheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn schedule(&mut self, id: TimerId, interval: Duration) -> Result<IntervalHandle> {
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            dispatcher.dispatch(CarouselEvent::AutoplayTick(id));
        });

        let millis = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);
        let interval_id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| CarouselError::TimerFailed(js_error(&e)))?;

        Ok(IntervalHandle {
            window: self.window.clone(),
            interval_id,
            _callback: callback,
        })
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        drop(handle);
    }
}
