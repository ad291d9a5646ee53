// ABOUTME: The view contract consumed by layout containers.
// ABOUTME: Views own a renderable handle; containers drive visibility and sizing.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Opaque handle to a renderable element owned by the host.
///
/// The engine never interprets the handle; it only stores it, hands it back
/// to the host, and copies it into overlay snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(u64);

impl NodeHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A visual panel managed by the layout engine.
///
/// Containers set visibility, query the minimum size, and notify the view
/// when its available space changed. `destroy` is called exactly once, after
/// the view's container has been detached from the tree.
pub trait View {
    fn node(&self) -> NodeHandle;

    fn visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn resized(&mut self) {}

    fn destroy(&mut self) {}
}

/// A view with no behavior beyond carrying a renderable handle.
///
/// Useful for hosts that manage rendering entirely on their side and only
/// need the engine for structure.
#[derive(Debug, Clone)]
pub struct HostView {
    node: NodeHandle,
    visible: bool,
    min_size: Size,
}

impl HostView {
    pub fn new(node: NodeHandle) -> Self {
        Self {
            node,
            visible: true,
            min_size: Size::ZERO,
        }
    }

    pub fn with_min_size(node: NodeHandle, min_size: Size) -> Self {
        Self {
            node,
            visible: true,
            min_size,
        }
    }
}

impl View for HostView {
    fn node(&self) -> NodeHandle {
        self.node
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn min_size(&self) -> Size {
        self.min_size
    }
}
