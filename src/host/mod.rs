//! Host boundary module
//!
//! The carousel never touches a DOM directly. Everything it needs from its
//! environment goes through [`CarouselHost`]:
//!
//! - **Discovery** of descendant nodes by structural [`Role`], once, at mount
//! - **Presentation** through a single boolean "active" state per node
//! - **Viewport query** used to gate keyboard navigation
//! - **Listener subscriptions** returned as handles the controller owns and
//!   releases on detach
//!
//! # Listener table
//!
//! ```text
//! PrevControl   --Activate------------> prev()
//! NextControl   --Activate------------> next()
//! Indicator(i)  --Activate------------> go_to_slide(i)
//! Document      --KeyDown-------------> prev()/next() when in viewport
//! Document      --VisibilityChange----> pause/resume autoplay
//! Container     --PointerEnter/Leave--> pause/resume autoplay
//! Container     --TouchStart/End------> swipe detection
//! ```
//!
//! Hosts translate the native events they observe on a binding into
//! [`crate::controller::CarouselEvent`] values and hand them to the
//! controller's `handle_event`.

pub mod memory;

pub use memory::{MemoryHost, MemoryNode, MemorySubscription};

use crate::controller::{CarouselEvent, Key};
use crate::error::Result;
use std::fmt;

/// Structural role of a descendant node of the carousel container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// One rotating content panel
    Slide,
    /// One dot paired with the slide at the same position
    Indicator,
    /// The "previous slide" control
    PrevControl,
    /// The "next slide" control
    NextControl,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slide => "slide",
            Self::Indicator => "indicator",
            Self::PrevControl => "previous control",
            Self::NextControl => "next control",
        };
        f.write_str(name)
    }
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The previous control
    PrevControl,
    /// The next control
    NextControl,
    /// The indicator at the given position
    Indicator(usize),
    /// The carousel container itself
    Container,
    /// The document owning the container
    Document,
}

/// What kind of native input a listener observes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Click or equivalent activation
    Activate,
    /// Key pressed
    KeyDown,
    /// Page visibility changed
    VisibilityChange,
    /// Pointer entered the target
    PointerEnter,
    /// Pointer left the target
    PointerLeave,
    /// Touch started on the target
    TouchStart,
    /// Touch ended on the target
    TouchEnd,
}

impl InputKind {
    /// DOM event type observed for this input
    pub const fn dom_event_type(self) -> &'static str {
        match self {
            Self::Activate => "click",
            Self::KeyDown => "keydown",
            Self::VisibilityChange => "visibilitychange",
            Self::PointerEnter => "mouseenter",
            Self::PointerLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
        }
    }

    /// Which touch list carries the contact point for touch inputs
    ///
    /// A finished contact is no longer in the active list, so touch end reads
    /// the changed list.
    pub const fn touch_list(self) -> Option<TouchList> {
        match self {
            Self::TouchStart => Some(TouchList::Active),
            Self::TouchEnd => Some(TouchList::Changed),
            _ => None,
        }
    }
}

/// Touch list on a native touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchList {
    /// Contacts currently on the surface (`touches`)
    Active,
    /// Contacts that changed in this event (`changedTouches`)
    Changed,
}

/// What a host extracted from a native event before translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputDetail<'a> {
    /// Nothing beyond the event itself
    None,
    /// Key name as reported by the platform, e.g. `"ArrowLeft"`
    Key(&'a str),
    /// Document visibility after the change
    Hidden(bool),
    /// Horizontal position of the first contact point
    PointX(f64),
}

/// One listener the controller asks its host to attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Node the listener is attached to
    pub target: ListenTarget,
    /// Native input observed
    pub input: InputKind,
}

impl Binding {
    const fn new(target: ListenTarget, input: InputKind) -> Self {
        Self { target, input }
    }
}

impl Binding {
    /// Turn a native event observed on this binding into carousel input
    ///
    /// Returns `None` when the detail does not fit the input kind, e.g. a
    /// touch event without a contact point.
    pub fn translate(self, detail: InputDetail<'_>) -> Option<CarouselEvent> {
        let event = match (self.input, self.target, detail) {
            (InputKind::Activate, ListenTarget::PrevControl, _) => CarouselEvent::PrevActivated,
            (InputKind::Activate, ListenTarget::NextControl, _) => CarouselEvent::NextActivated,
            (InputKind::Activate, ListenTarget::Indicator(i), _) => {
                CarouselEvent::IndicatorActivated(i)
            }
            (InputKind::KeyDown, _, InputDetail::Key(name)) => {
                CarouselEvent::KeyDown(Key::from_key_name(name))
            }
            (InputKind::VisibilityChange, _, InputDetail::Hidden(hidden)) => {
                CarouselEvent::VisibilityChanged { hidden }
            }
            (InputKind::PointerEnter, _, _) => CarouselEvent::PointerEnter,
            (InputKind::PointerLeave, _, _) => CarouselEvent::PointerLeave,
            (InputKind::TouchStart, _, InputDetail::PointX(x)) => CarouselEvent::TouchStart { x },
            (InputKind::TouchEnd, _, InputDetail::PointX(x)) => CarouselEvent::TouchEnd { x },
            _ => return None,
        };
        Some(event)
    }
}

/// Full listener table for a carousel with `indicator_count` indicators
pub fn bindings(indicator_count: usize) -> Vec<Binding> {
    let mut table = Vec::with_capacity(indicator_count + 8);
    table.push(Binding::new(ListenTarget::PrevControl, InputKind::Activate));
    table.push(Binding::new(ListenTarget::NextControl, InputKind::Activate));
    table.extend(
        (0..indicator_count).map(|i| Binding::new(ListenTarget::Indicator(i), InputKind::Activate)),
    );
    table.push(Binding::new(ListenTarget::Document, InputKind::KeyDown));
    table.push(Binding::new(
        ListenTarget::Document,
        InputKind::VisibilityChange,
    ));
    table.push(Binding::new(ListenTarget::Container, InputKind::PointerEnter));
    table.push(Binding::new(ListenTarget::Container, InputKind::PointerLeave));
    table.push(Binding::new(ListenTarget::Container, InputKind::TouchStart));
    table.push(Binding::new(ListenTarget::Container, InputKind::TouchEnd));
    table
}

/// Vertical extent of a region, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    /// Distance from the top of the viewport to the top of the region
    pub top: f64,
    /// Distance from the top of the viewport to the bottom of the region
    pub bottom: f64,
}

impl VerticalSpan {
    /// Whether the region overlaps a viewport of the given height
    ///
    /// Both comparisons are strict: a region ending exactly at the top edge
    /// or starting exactly at the bottom edge is not visible.
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// The environment a carousel is mounted into
pub trait CarouselHost {
    /// Opaque node handle
    type Node;
    /// Handle for an attached listener; passed back to `unsubscribe`
    type Subscription;

    /// All descendants of the container with the given role, in document order
    fn query_all(&self, role: Role) -> Vec<Self::Node>;

    /// First descendant of the container with the given role
    fn query(&self, role: Role) -> Option<Self::Node> {
        self.query_all(role).into_iter().next()
    }

    /// Set or clear the active presentation state of a node
    fn set_active(&mut self, node: &Self::Node, active: bool);

    /// Whether the carousel region currently intersects the viewport vertically
    fn is_in_viewport(&self) -> bool;

    /// Attach a listener for the given binding
    fn subscribe(&mut self, binding: Binding) -> Result<Self::Subscription>;

    /// Detach a listener previously returned by `subscribe`
    fn unsubscribe(&mut self, subscription: Self::Subscription);
}
