// ABOUTME: Derivation of a container tree from pre-existing structured markup.
// ABOUTME: Reads layout kind and orientation hints from node-level attributes.

use dock_core::View;

use crate::container::{ContainerId, ContainerOptions, Orientation};
use crate::tree::LayoutTree;

/// A node of host-side markup describing a pre-existing layout.
///
/// Attribute fields mirror the markup hints (`layout`, `orientation`,
/// `name`, `fixed`, `auto_wrap`, `fixed_layout`); leaves carry the
/// already-built view for that slot.
#[derive(Default)]
pub struct MarkupNode {
    pub layout: Option<String>,
    pub orientation: Option<String>,
    pub name: Option<String>,
    pub fixed: bool,
    pub auto_wrap: bool,
    pub fixed_layout: bool,
    pub stacked: bool,
    pub children: Vec<MarkupNode>,
    pub view: Option<Box<dyn View>>,
}

impl MarkupNode {
    pub fn view(view: Box<dyn View>) -> Self {
        Self {
            view: Some(view),
            ..Default::default()
        }
    }

    pub fn layout(kind: impl Into<String>) -> Self {
        Self {
            layout: Some(kind.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("markup node has neither a recognized layout kind nor an attached view")]
    LeafWithoutView,
}

impl ContainerOptions {
    /// Pure translation of markup attributes into constructor options
    pub fn from_markup(markup: &MarkupNode) -> Self {
        Self {
            name: markup
                .name
                .clone()
                .unwrap_or_else(|| Self::default().name),
            fixed: markup.fixed,
            auto_wrap: markup.auto_wrap,
            fixed_layout: markup.fixed_layout,
        }
    }
}

/// A `layout` hint starting with `v` (or a vertical `orientation`
/// attribute) means vertical; everything else is horizontal
fn derive_orientation(markup: &MarkupNode) -> Orientation {
    let vertical = markup
        .layout
        .as_deref()
        .is_some_and(|hint| hint.starts_with('v'))
        || markup
            .orientation
            .as_deref()
            .is_some_and(|hint| hint.starts_with('v'));
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

impl LayoutTree {
    /// Infer a detached container subtree from pre-existing markup.
    ///
    /// Derivation is atomic: on error, nothing it created stays in the tree.
    pub fn derive(&mut self, markup: MarkupNode) -> Result<ContainerId, DeriveError> {
        let mut created = Vec::new();
        let result = self.with_quiet(|tree| tree.derive_node(markup, &mut created));
        match result {
            Ok(id) => {
                tracing::debug!("derived container {:?} from markup", id);
                Ok(id)
            }
            Err(error) => {
                for id in created {
                    self.drop_node(id);
                }
                Err(error)
            }
        }
    }

    fn derive_node(
        &mut self,
        markup: MarkupNode,
        created: &mut Vec<ContainerId>,
    ) -> Result<ContainerId, DeriveError> {
        let orientation = derive_orientation(&markup);
        let options = ContainerOptions::from_markup(&markup);
        let MarkupNode {
            layout,
            stacked,
            children,
            view,
            ..
        } = markup;

        let id = match layout.as_deref() {
            Some(hint) if hint.contains("split") => self.new_split(orientation, options),
            Some(hint) if hint.contains("lineup") => self.new_lineup(orientation, stacked, options),
            Some("tabbing") => self.new_tabbing(options),
            _ => {
                return match view {
                    Some(view) => {
                        let leaf = self.new_view_with(options, view);
                        created.push(leaf);
                        Ok(leaf)
                    }
                    // an unlabeled grouping still derives, as a lineup
                    None if !children.is_empty() => {
                        let lineup = self.new_lineup(orientation, stacked, options);
                        created.push(lineup);
                        self.derive_children(lineup, children, created)
                    }
                    None => Err(DeriveError::LeafWithoutView),
                };
            }
        };
        created.push(id);
        self.derive_children(id, children, created)
    }

    fn derive_children(
        &mut self,
        parent: ContainerId,
        children: Vec<MarkupNode>,
        created: &mut Vec<ContainerId>,
    ) -> Result<ContainerId, DeriveError> {
        for child in children {
            let derived = self.derive_node(child, created)?;
            self.push(parent, derived);
        }
        Ok(parent)
    }
}
