//! DOM implementation of the carousel host

use super::{Dispatcher, js_error};
use crate::config::Selectors;
use crate::controller::CarouselEvent;
use crate::error::{CarouselError, Result, StringError};
use crate::host::{
    Binding, CarouselHost, InputDetail, InputKind, ListenTarget, Role, TouchList, VerticalSpan,
};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, TouchEvent};

/// Carousel host backed by a container element
pub struct DomHost {
    document: Document,
    container: Element,
    selectors: Selectors,
    dispatcher: Dispatcher,
}

/// An attached DOM listener; removes itself from its target when dropped
pub struct ListenerGuard {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

impl DomHost {
    pub(crate) fn new(
        document: Document,
        container: Element,
        selectors: Selectors,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            document,
            container,
            selectors,
            dispatcher,
        }
    }

    fn selector(&self, role: Role) -> &str {
        match role {
            Role::Slide => &self.selectors.slide,
            Role::Indicator => &self.selectors.indicator,
            Role::PrevControl => &self.selectors.prev,
            Role::NextControl => &self.selectors.next,
        }
    }

    fn target_of(&self, target: ListenTarget) -> Option<EventTarget> {
        match target {
            ListenTarget::PrevControl => self.query(Role::PrevControl).map(Into::into),
            ListenTarget::NextControl => self.query(Role::NextControl).map(Into::into),
            ListenTarget::Indicator(i) => self
                .query_all(Role::Indicator)
                .into_iter()
                .nth(i)
                .map(Into::into),
            ListenTarget::Container => Some(self.container.clone().into()),
            ListenTarget::Document => Some(self.document.clone().into()),
        }
    }
}

/// Pull out what translation needs from a native event observed on `binding`
fn extract_detail(
    binding: Binding,
    document: &Document,
    event: &Event,
) -> Option<InputDetail<'static>> {
    let detail = match binding.input {
        InputKind::VisibilityChange => InputDetail::Hidden(document.hidden()),
        InputKind::TouchStart | InputKind::TouchEnd => {
            let touch_event = event.dyn_ref::<TouchEvent>()?;
            let touches = match binding.input.touch_list()? {
                TouchList::Active => touch_event.touches(),
                TouchList::Changed => touch_event.changed_touches(),
            };
            InputDetail::PointX(f64::from(touches.get(0)?.client_x()))
        }
        _ => InputDetail::None,
    };
    Some(detail)
}

/// Translate a native event observed on `binding` into carousel input
fn translate(binding: Binding, document: &Document, event: &Event) -> Option<CarouselEvent> {
    if binding.input == InputKind::KeyDown {
        let key = event.dyn_ref::<KeyboardEvent>()?.key();
        return binding.translate(InputDetail::Key(&key));
    }
    binding.translate(extract_detail(binding, document, event)?)
}

impl CarouselHost for DomHost {
    type Node = Element;
    type Subscription = ListenerGuard;

    fn query_all(&self, role: Role) -> Vec<Element> {
        let Ok(list) = self.container.query_selector_all(self.selector(role)) else {
            warn!("Invalid selector for {role}: '{}'", self.selector(role));
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query(&self, role: Role) -> Option<Element> {
        self.container
            .query_selector(self.selector(role))
            .ok()
            .flatten()
    }

    fn set_active(&mut self, node: &Element, active: bool) {
        if let Err(e) = node
            .class_list()
            .toggle_with_force(&self.selectors.active_class, active)
        {
            warn!("Failed to toggle active class: {}", js_error(&e));
        }
    }

    fn is_in_viewport(&self) -> bool {
        let Some(viewport_height) = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
        else {
            return false;
        };
        let rect = self.container.get_bounding_client_rect();
        VerticalSpan {
            top: rect.top(),
            bottom: rect.bottom(),
        }
        .intersects_viewport(viewport_height)
    }

    fn subscribe(&mut self, binding: Binding) -> Result<ListenerGuard> {
        let target = self.target_of(binding.target).ok_or_else(|| {
            CarouselError::SubscriptionFailed(StringError::new(format!(
                "no node for {:?}",
                binding.target
            )))
        })?;

        let document = self.document.clone();
        let dispatcher = self.dispatcher.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(input) = translate(binding, &document, &event) {
                dispatcher.dispatch(input);
            }
        });

        let event_type = binding.input.dom_event_type();
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|e| CarouselError::SubscriptionFailed(js_error(&e)))?;

        Ok(ListenerGuard {
            target,
            event_type,
            callback,
        })
    }

    fn unsubscribe(&mut self, subscription: ListenerGuard) {
        drop(subscription);
    }
}
