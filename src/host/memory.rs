//! In-memory host
//!
//! A tiny node tree with the carousel's fixed structure. It records active
//! flags and live subscriptions so that the rendering and listener
//! invariants can be observed directly, and backs the headless console.

use super::{Binding, CarouselHost, Role};
use crate::error::Result;
use std::collections::HashMap;

/// Node handle in a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNode {
    /// Role the node was created with
    pub role: Role,
    /// Position among nodes of the same role
    pub index: usize,
}

/// Subscription handle issued by a [`MemoryHost`]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MemorySubscription(u64);

/// In-memory carousel structure
#[derive(Debug)]
pub struct MemoryHost {
    slide_count: usize,
    indicator_count: usize,
    has_prev: bool,
    has_next: bool,
    active: HashMap<MemoryNode, bool>,
    in_viewport: bool,
    next_subscription: u64,
    listeners: HashMap<u64, Binding>,
}

impl MemoryHost {
    /// Full structure: `slides` slides, as many indicators, both controls
    pub fn new(slides: usize) -> Self {
        Self::with_structure(slides, slides, true, true)
    }

    /// Arbitrary structure, including broken ones
    pub fn with_structure(
        slide_count: usize,
        indicator_count: usize,
        has_prev: bool,
        has_next: bool,
    ) -> Self {
        Self {
            slide_count,
            indicator_count,
            has_prev,
            has_next,
            active: HashMap::new(),
            in_viewport: true,
            next_subscription: 0,
            listeners: HashMap::new(),
        }
    }

    /// Move the carousel into or out of the viewport
    pub fn set_in_viewport(&mut self, visible: bool) {
        self.in_viewport = visible;
    }

    /// Whether the node currently carries the active state
    pub fn is_active(&self, node: MemoryNode) -> bool {
        self.active.get(&node).copied().unwrap_or(false)
    }

    /// Positions of the active nodes with the given role, ascending
    pub fn active_positions(&self, role: Role) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .active
            .iter()
            .filter(|(node, active)| node.role == role && **active)
            .map(|(node, _)| node.index)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Number of slides in the structure
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Number of listeners currently attached
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a listener is attached for the binding
    pub fn is_listening(&self, binding: Binding) -> bool {
        self.listeners.values().any(|b| *b == binding)
    }

    fn nodes(role: Role, count: usize) -> Vec<MemoryNode> {
        (0..count).map(|index| MemoryNode { role, index }).collect()
    }
}

impl CarouselHost for MemoryHost {
    type Node = MemoryNode;
    type Subscription = MemorySubscription;

    fn query_all(&self, role: Role) -> Vec<MemoryNode> {
        let count = match role {
            Role::Slide => self.slide_count,
            Role::Indicator => self.indicator_count,
            Role::PrevControl => usize::from(self.has_prev),
            Role::NextControl => usize::from(self.has_next),
        };
        Self::nodes(role, count)
    }

    fn set_active(&mut self, node: &MemoryNode, active: bool) {
        self.active.insert(*node, active);
    }

    fn is_in_viewport(&self) -> bool {
        self.in_viewport
    }

    fn subscribe(&mut self, binding: Binding) -> Result<MemorySubscription> {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.insert(id, binding);
        Ok(MemorySubscription(id))
    }

    fn unsubscribe(&mut self, subscription: MemorySubscription) {
        self.listeners.remove(&subscription.0);
    }
}
