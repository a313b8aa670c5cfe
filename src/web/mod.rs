//! Browser bindings
//!
//! Mounts the carousel on the real DOM through `web-sys`:
//!
//! - [`DomHost`] finds nodes with the configured selectors, toggles the
//!   active class, measures the container against the viewport, and attaches
//!   listeners as [`ListenerGuard`]s that remove themselves when dropped
//! - [`IntervalScheduler`] drives autoplay with `setInterval`
//!
//! Listener and timer callbacks reach the controller through a shared
//! [`Dispatcher`] holding a weak reference, so the controller owns its
//! callbacks and not the other way round.

mod dom_host;
mod interval;

pub use dom_host::{DomHost, ListenerGuard};
pub use interval::{IntervalHandle, IntervalScheduler};

use crate::config::CarouselConfig;
use crate::controller::{CarouselController, CarouselEvent, HeroCarousel};
use crate::error::{CarouselError, StringError};
use crate::utils::LineMakeWriter;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{Level, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

type DomController = CarouselController<DomHost, IntervalScheduler>;

/// Routes events from DOM callbacks into the mounted controller
#[derive(Clone, Default)]
pub struct Dispatcher {
    target: Rc<RefCell<Weak<RefCell<DomController>>>>,
}

impl Dispatcher {
    fn connect(&self, controller: &Rc<RefCell<DomController>>) {
        *self.target.borrow_mut() = Rc::downgrade(controller);
    }

    /// Deliver one event; dropped when nothing is mounted
    pub fn dispatch(&self, event: CarouselEvent) {
        let Some(controller) = self.target.borrow().upgrade() else {
            return;
        };
        match controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle_event(event),
            Err(_) => warn!("Carousel busy, dropping re-entrant {event:?}"),
        };
    }
}

/// A carousel mounted on the page
pub struct WebCarousel {
    controller: Rc<RefCell<DomController>>,
}

impl WebCarousel {
    /// Index of the visible slide
    pub fn current_index(&self) -> usize {
        self.controller.borrow().current_index()
    }

    /// Detach listeners and stop autoplay
    pub fn detach(&self) {
        self.controller.borrow_mut().detach();
    }

    /// Keep the carousel alive for the rest of the page's life
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Convert a JavaScript exception into an error source
pub(crate) fn js_error(value: &JsValue) -> Box<StringError> {
    StringError::new(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

/// Mount the carousel on `container`
///
/// Returns `None` when the structure under the container is unusable; the
/// reason is logged.
pub fn mount_on(container: Element, config: &CarouselConfig) -> Option<WebCarousel> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let dispatcher = Dispatcher::default();

    let host = DomHost::new(document, container, config.selectors.clone(), dispatcher.clone());
    let scheduler = IntervalScheduler::new(window, dispatcher.clone());

    match HeroCarousel::init(host, scheduler, config) {
        HeroCarousel::Active(controller) => {
            let controller = Rc::new(RefCell::new(controller));
            dispatcher.connect(&controller);
            Some(WebCarousel { controller })
        }
        HeroCarousel::Inactive => None,
    }
}

/// Find the container with the configured selector and mount on it
pub fn mount_hero_carousel(config: &CarouselConfig) -> Result<Option<WebCarousel>, CarouselError> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Err(CarouselError::SubscriptionFailed(StringError::new(
            "no document available",
        )));
    };
    let container = document
        .query_selector(&config.selectors.container)
        .map_err(|e| CarouselError::ConfigError(js_error(&e)))?;
    match container {
        Some(container) => Ok(mount_on(container, config)),
        None => {
            info!(
                "No element matches '{}', carousel not mounted",
                config.selectors.container
            );
            Ok(None)
        }
    }
}

/// Write one formatted log line to the developer console at the matching level
fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Route `tracing` output to the developer console
///
/// Timestamps are left to the console; the wasm target has no system clock.
/// A no-op when a subscriber is already installed.
pub fn init_console_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(LineMakeWriter::new(console_sink))
        .with_max_level(Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("hero-carousel v{} logging to the console", env!("CARGO_PKG_VERSION"));
    }
}

/// Module entry point: mount with the default configuration once the DOM is parsed
#[wasm_bindgen(start)]
pub fn start() {
    init_console_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let mount = || match mount_hero_carousel(&CarouselConfig::default()) {
        Ok(Some(carousel)) => carousel.keep_alive(),
        Ok(None) => {}
        Err(e) => warn!("Carousel not mounted: {e}"),
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(mount);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            warn!("Failed to wait for DOMContentLoaded: {}", js_error(&e));
        }
    } else {
        mount();
    }
}
