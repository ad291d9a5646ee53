// ABOUTME: Persistence for layout trees: dump records, restore and JSON round trip.
// ABOUTME: Restores are atomic; on any data error the existing tree is left untouched.

use dock_core::View;
use serde::{Deserialize, Serialize};

use crate::container::{
    ContainerId, ContainerKind, ContainerOptions, Orientation, SequentialMode,
};
use crate::tree::LayoutTree;

/// Serializable record of a container subtree.
///
/// `type` discriminates the concrete container: `"view"`, `"split"`,
/// `"lineup"`, `"tabbing"` or `"root"`. Leaf records carry a view reference
/// id which a restore resolves back to a live view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub auto_wrap: bool,
    #[serde(default)]
    pub fixed_layout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_layout: Option<bool>,
    /// Index of the active tab within `children`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LayoutDump>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_reference_id: Option<u64>,
}

impl LayoutDump {
    pub fn to_json(&self) -> Result<String, RestoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RestoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("unknown container type: {0}")]
    UnknownType(String),

    #[error("dump of a view container is missing its view reference id")]
    MissingReference,

    #[error("no view registered for reference id {0}")]
    MissingView(u64),

    #[error("active tab index {index} is out of range ({len} children)")]
    ActiveOutOfRange { index: usize, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContainerOptions {
    /// Pure translation of a dump record into constructor options
    pub fn from_dump(dump: &LayoutDump) -> Self {
        Self {
            name: dump.name.clone(),
            fixed: dump.fixed,
            auto_wrap: dump.auto_wrap,
            fixed_layout: dump.fixed_layout,
        }
    }
}

impl LayoutTree {
    /// Dump the subtree rooted at `id` into a serializable record
    pub fn persist(&self, id: ContainerId) -> LayoutDump {
        let node = self.node(id);
        let mut dump = LayoutDump {
            kind: node.kind.type_name().to_string(),
            name: node.options.name.clone(),
            fixed: node.options.fixed,
            auto_wrap: node.options.auto_wrap,
            fixed_layout: node.options.fixed_layout,
            orientation: None,
            stack_layout: None,
            active: None,
            children: None,
            view_reference_id: None,
        };
        match &node.kind {
            ContainerKind::View(slot) => {
                dump.view_reference_id = Some(slot.reference);
            }
            ContainerKind::Sequential(s) => {
                dump.orientation = Some(s.orientation);
                if s.mode == SequentialMode::Lineup {
                    dump.stack_layout = Some(s.stack_layout);
                }
                dump.children = Some(s.children.iter().map(|c| self.persist(*c)).collect());
            }
            ContainerKind::Tabbing(t) => {
                dump.active = t
                    .active
                    .and_then(|active| t.children.iter().position(|c| *c == active));
                dump.children = Some(t.children.iter().map(|c| self.persist(*c)).collect());
            }
            ContainerKind::Root(r) => {
                dump.children = Some(r.children.iter().map(|c| self.persist(*c)).collect());
            }
        }
        dump
    }

    /// Rebuild this tree's content from a root dump.
    ///
    /// Leaf views are resolved through `resolve_view` by the reference id
    /// stored in the dump. The restore is atomic: the new subtree is built
    /// detached first, and on any error it is discarded and the current tree
    /// stays exactly as it was.
    pub fn restore(
        &mut self,
        dump: &LayoutDump,
        resolve_view: &mut dyn FnMut(u64) -> Option<Box<dyn View>>,
    ) -> Result<(), RestoreError> {
        if dump.kind != "root" {
            return Err(RestoreError::UnknownType(dump.kind.clone()));
        }
        let child_dumps: &[LayoutDump] = dump.children.as_deref().unwrap_or(&[]);
        let mut created = Vec::new();
        let mut subtrees = Vec::new();
        let built: Result<(), RestoreError> = self.with_quiet(|tree| {
            for child_dump in child_dumps {
                subtrees.push(tree.restore_node(child_dump, resolve_view, &mut created)?);
            }
            Ok(())
        });
        if let Err(error) = built {
            for id in created {
                self.drop_node(id);
            }
            return Err(error);
        }

        // only a fully rebuilt layout replaces the existing one
        self.clear(self.root());
        let mut subtrees = subtrees.into_iter();
        if let Some(first) = subtrees.next() {
            self.set_root(first);
            for extra in subtrees {
                let root = self.root();
                self.push(root, extra);
            }
        }
        tracing::info!("restored layout with {} containers", created.len());
        Ok(())
    }

    fn restore_node(
        &mut self,
        dump: &LayoutDump,
        resolve_view: &mut dyn FnMut(u64) -> Option<Box<dyn View>>,
        created: &mut Vec<ContainerId>,
    ) -> Result<ContainerId, RestoreError> {
        let options = ContainerOptions::from_dump(dump);
        match dump.kind.as_str() {
            "view" => {
                let reference = dump.view_reference_id.ok_or(RestoreError::MissingReference)?;
                let view = resolve_view(reference).ok_or(RestoreError::MissingView(reference))?;
                let id = self.new_view_with_reference(options, view, reference);
                created.push(id);
                Ok(id)
            }
            "split" | "lineup" => {
                let orientation = dump.orientation.unwrap_or(Orientation::Horizontal);
                let id = if dump.kind == "split" {
                    self.new_split(orientation, options)
                } else {
                    self.new_lineup(orientation, dump.stack_layout.unwrap_or(false), options)
                };
                created.push(id);
                for child_dump in dump.children.as_deref().unwrap_or(&[]) {
                    let child = self.restore_node(child_dump, resolve_view, created)?;
                    self.push(id, child);
                }
                Ok(id)
            }
            "tabbing" => {
                let id = self.new_tabbing(options);
                created.push(id);
                for child_dump in dump.children.as_deref().unwrap_or(&[]) {
                    let child = self.restore_node(child_dump, resolve_view, created)?;
                    self.push(id, child);
                }
                if let Some(index) = dump.active {
                    let target = self.children(id).get(index).copied();
                    let Some(target) = target else {
                        return Err(RestoreError::ActiveOutOfRange {
                            index,
                            len: self.children(id).len(),
                        });
                    };
                    self.change_active(id, Some(target));
                }
                Ok(id)
            }
            other => Err(RestoreError::UnknownType(other.to_string())),
        }
    }
}
