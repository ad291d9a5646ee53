// ABOUTME: Recursive docking-layout engine for arranging views in a host surface.
// ABOUTME: Split panes, tabbed stacks, drag re-docking, maximize and persistence.

mod container;
mod dump;
mod events;
mod markup;
mod tree;

pub use container::{
    Container, ContainerId, ContainerOptions, DragPayload, DropArea, Orientation,
    OverlaySnapshot, SequentialMode, CONTAINER_MIME,
};
pub use dump::{LayoutDump, RestoreError};
pub use events::{LayoutEvent, LayoutListener};
pub use markup::{DeriveError, MarkupNode};
pub use tree::LayoutTree;
