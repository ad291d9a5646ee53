// ABOUTME: Container kinds, options and identity for the docking tree.
// ABOUTME: Containers are arena nodes; the tree owns them and wires the edges.

use std::fmt;

use dock_core::{NodeHandle, View};
use serde::{Deserialize, Serialize};

/// MIME tag identifying drag payloads produced by this engine.
pub const CONTAINER_MIME: &str = "text/x-dock-layout-container";

/// Stable identifier of a container within its tree.
///
/// Ids are allocated by a monotonic counter owned by the tree and are never
/// reused for the tree's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Axis along which a sequential container splits its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Interpret a markup hint: anything starting with `v` means vertical
    pub fn from_hint(hint: &str) -> Self {
        if hint.starts_with('v') {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Drop area relative to a reference container during drag and drop.
///
/// `Center` is reserved for tabbing targets; sequential containers only
/// accept the four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropArea {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl DropArea {
    /// True for the sides that insert after the reference child
    pub fn is_after(self) -> bool {
        matches!(self, DropArea::Right | DropArea::Bottom)
    }
}

/// User-facing container options.
///
/// `fixed` containers cannot be closed; `fixed_layout` containers cannot be
/// rearranged by dragging but their separators may still move. `auto_wrap`
/// tags the container for the external builder: when dropped into a
/// non-wrapping context the builder wraps it first.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerOptions {
    pub name: String,
    pub fixed: bool,
    pub auto_wrap: bool,
    pub fixed_layout: bool,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            name: "View".to_string(),
            fixed: false,
            auto_wrap: false,
            fixed_layout: false,
        }
    }
}

impl ContainerOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A fixed container always has a fixed layout
    pub(crate) fn normalized(mut self) -> Self {
        if self.fixed {
            self.fixed_layout = true;
        }
        self
    }
}

/// Typed drag payload handed to the host when a header drag starts.
///
/// The host's drop target feeds `container` back into [`LayoutTree::place`].
///
/// [`LayoutTree::place`]: crate::LayoutTree::place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime: &'static str,
    pub container: ContainerId,
    pub label: String,
}

/// Snapshot shown by the root while a container is maximized.
///
/// This is a disposable render-a-copy of the original, tied to it by id; the
/// live container keeps its tree position untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    pub container: ContainerId,
    pub label: String,
    pub nodes: Vec<NodeHandle>,
}

/// Distinguishes the two sequential container flavors.
///
/// A `Split` is the canonical split pane and needs at least two children; a
/// `Lineup` is a one-axis flow that survives with a single child and can
/// render stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialMode {
    Split,
    Lineup,
}

pub(crate) struct ViewSlot {
    pub(crate) view: Box<dyn View>,
    /// Reference id written into dumps so a restore can resolve the view
    pub(crate) reference: u64,
}

pub(crate) struct Sequential {
    pub(crate) mode: SequentialMode,
    pub(crate) orientation: Orientation,
    pub(crate) stack_layout: bool,
    pub(crate) ratios: Vec<f32>,
    pub(crate) children: Vec<ContainerId>,
}

pub(crate) struct Tabbing {
    pub(crate) children: Vec<ContainerId>,
    pub(crate) active: Option<ContainerId>,
}

pub(crate) struct RootSlot {
    pub(crate) children: Vec<ContainerId>,
    pub(crate) overlay: Option<OverlaySnapshot>,
}

/// The tagged variant describing what a container is
pub(crate) enum ContainerKind {
    View(ViewSlot),
    Sequential(Sequential),
    Tabbing(Tabbing),
    Root(RootSlot),
}

impl ContainerKind {
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            ContainerKind::View(_) => "view",
            ContainerKind::Sequential(s) => match s.mode {
                SequentialMode::Split => "split",
                SequentialMode::Lineup => "lineup",
            },
            ContainerKind::Tabbing(_) => "tabbing",
            ContainerKind::Root(_) => "root",
        }
    }

    pub(crate) fn is_parent(&self) -> bool {
        !matches!(self, ContainerKind::View(_))
    }

    /// Structural floor; dropping below it on removal collapses the container
    pub(crate) fn min_child_count(&self) -> usize {
        match self {
            ContainerKind::View(_) => 0,
            ContainerKind::Sequential(s) => match s.mode {
                SequentialMode::Split => 2,
                SequentialMode::Lineup => 1,
            },
            ContainerKind::Tabbing(_) | ContainerKind::Root(_) => 0,
        }
    }

    pub(crate) fn children(&self) -> &[ContainerId] {
        match self {
            ContainerKind::View(_) => &[],
            ContainerKind::Sequential(s) => &s.children,
            ContainerKind::Tabbing(t) => &t.children,
            ContainerKind::Root(r) => &r.children,
        }
    }
}

/// A node of the layout tree.
///
/// The parent's child sequence is the owning edge; `parent` is a non-owning
/// back-reference used for traversal only.
pub struct Container {
    pub(crate) id: ContainerId,
    pub(crate) options: ContainerOptions,
    pub(crate) parent: Option<ContainerId>,
    pub(crate) visible: bool,
    pub(crate) maximized: bool,
    pub(crate) kind: ContainerKind,
}

impl Container {
    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    pub fn parent(&self) -> Option<ContainerId> {
        self.parent
    }

    /// Dump discriminant: `"view"`, `"split"`, `"lineup"`, `"tabbing"` or `"root"`
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn is_view(&self) -> bool {
        matches!(self.kind, ContainerKind::View(_))
    }

    pub fn is_parent(&self) -> bool {
        self.kind.is_parent()
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Tells the external builder to wrap this container when it is dropped
    /// into a non-wrapping context
    pub fn auto_wrap_on_drop(&self) -> bool {
        self.options.auto_wrap
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match &self.kind {
            ContainerKind::Sequential(s) => Some(s.orientation),
            _ => None,
        }
    }

    pub fn stack_layout(&self) -> bool {
        matches!(
            &self.kind,
            ContainerKind::Sequential(Sequential {
                mode: SequentialMode::Lineup,
                stack_layout: true,
                ..
            })
        )
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("type", &self.kind.type_name())
            .field("name", &self.options.name)
            .field("parent", &self.parent)
            .field("children", &self.kind.children())
            .finish()
    }
}
