// ABOUTME: Shared types for the docking layout engine.
// ABOUTME: Defines the view contract and geometry primitives.

pub mod geometry;
pub mod view;

pub use geometry::Size;
pub use view::{HostView, NodeHandle, View};
