// ABOUTME: Typed notifications fired by the layout tree.
// ABOUTME: Listeners run synchronously after each state change, in registration order.

use crate::container::ContainerId;

/// Notification emitted after a tree state change.
///
/// Structural mutations additionally emit `LayoutChanged` once the mutation
/// (including any collapse it triggered) has settled.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    NameChanged {
        container: ContainerId,
        old: String,
        new: String,
    },
    VisibilityChanged {
        container: ContainerId,
        visible: bool,
    },
    ActiveChanged {
        container: ContainerId,
        old: Option<ContainerId>,
        new: Option<ContainerId>,
    },
    Maximize {
        container: ContainerId,
    },
    Restore {
        container: ContainerId,
    },
    Destroyed {
        container: ContainerId,
    },
    LayoutChanged,
}

/// Observer of layout events.
///
/// A listener must not assume it is the only observer; all registered
/// listeners see every event.
pub trait LayoutListener {
    fn on_layout_event(&mut self, event: &LayoutEvent);
}

impl<F: FnMut(&LayoutEvent)> LayoutListener for F {
    fn on_layout_event(&mut self, event: &LayoutEvent) {
        self(event)
    }
}
