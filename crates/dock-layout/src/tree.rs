// ABOUTME: Arena-backed container tree with the docking mutation protocol.
// ABOUTME: Handles push/remove/place/replace, collapse, visibility, sizing and maximize.

use std::collections::HashMap;

use dock_core::{NodeHandle, Size, View};

use crate::container::{
    Container, ContainerId, ContainerKind, ContainerOptions, DragPayload, DropArea, Orientation,
    OverlaySnapshot, RootSlot, Sequential, SequentialMode, Tabbing, ViewSlot, CONTAINER_MIME,
};
use crate::events::{LayoutEvent, LayoutListener};

/// The layout surface: a root container plus an arena of every container
/// that belongs to it.
///
/// All mutations are synchronous; notifications fire after the triggering
/// state change. The parent's child sequence is the owning edge, a node's
/// `parent` field only a back-reference, and the two are kept consistent by
/// every mutation.
///
/// Passing an id that is not in the tree, or violating a documented
/// precondition (e.g. activating a non-child tab), is a programmer error and
/// panics.
pub struct LayoutTree {
    nodes: HashMap<ContainerId, Container>,
    root: ContainerId,
    next_id: u64,
    listeners: Vec<Box<dyn LayoutListener>>,
    quiet: bool,
}

impl LayoutTree {
    pub fn new() -> Self {
        let root = ContainerId::new(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Container {
                id: root,
                options: ContainerOptions {
                    name: String::new(),
                    fixed: true,
                    auto_wrap: false,
                    fixed_layout: true,
                },
                parent: None,
                visible: true,
                maximized: false,
                kind: ContainerKind::Root(RootSlot {
                    children: Vec::new(),
                    overlay: None,
                }),
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
            listeners: Vec::new(),
            quiet: false,
        }
    }

    // ---- construction ------------------------------------------------------

    fn insert_node(&mut self, options: ContainerOptions, kind: ContainerKind) -> ContainerId {
        let id = ContainerId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Container {
                id,
                options: options.normalized(),
                parent: None,
                visible: true,
                maximized: false,
                kind,
            },
        );
        id
    }

    /// Create a detached leaf container wrapping `view`
    pub fn new_view(&mut self, name: impl Into<String>, view: Box<dyn View>) -> ContainerId {
        self.new_view_with(ContainerOptions::named(name), view)
    }

    pub fn new_view_with(&mut self, options: ContainerOptions, view: Box<dyn View>) -> ContainerId {
        let reference = self.next_id;
        self.insert_node(options, ContainerKind::View(ViewSlot { view, reference }))
    }

    pub(crate) fn new_view_with_reference(
        &mut self,
        options: ContainerOptions,
        view: Box<dyn View>,
        reference: u64,
    ) -> ContainerId {
        self.insert_node(options, ContainerKind::View(ViewSlot { view, reference }))
    }

    /// Create a detached split pane (at least two children once stable)
    pub fn new_split(&mut self, orientation: Orientation, options: ContainerOptions) -> ContainerId {
        self.insert_node(
            options,
            ContainerKind::Sequential(Sequential {
                mode: SequentialMode::Split,
                orientation,
                stack_layout: false,
                ratios: Vec::new(),
                children: Vec::new(),
            }),
        )
    }

    /// Create a detached lineup (one-axis flow, survives with a single child)
    pub fn new_lineup(
        &mut self,
        orientation: Orientation,
        stack_layout: bool,
        options: ContainerOptions,
    ) -> ContainerId {
        self.insert_node(
            options,
            ContainerKind::Sequential(Sequential {
                mode: SequentialMode::Lineup,
                orientation,
                stack_layout,
                ratios: Vec::new(),
                children: Vec::new(),
            }),
        )
    }

    /// Create a detached tabbing container
    pub fn new_tabbing(&mut self, options: ContainerOptions) -> ContainerId {
        self.insert_node(
            options,
            ContainerKind::Tabbing(Tabbing {
                children: Vec::new(),
                active: None,
            }),
        )
    }

    // ---- accessors ---------------------------------------------------------

    pub fn root(&self) -> ContainerId {
        self.root
    }

    /// The root's single subtree, if any
    pub fn root_child(&self) -> Option<ContainerId> {
        self.node(self.root).kind.children().first().copied()
    }

    pub fn get(&self, id: ContainerId) -> Option<&Container> {
        self.nodes.get(&id)
    }

    /// Total number of containers in the arena, including detached ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn children(&self, id: ContainerId) -> &[ContainerId] {
        self.node(id).kind.children()
    }

    pub fn parent(&self, id: ContainerId) -> Option<ContainerId> {
        self.node(id).parent
    }

    /// Ancestor chain, nearest parent first
    pub fn parents(&self, id: ContainerId) -> Vec<ContainerId> {
        let mut out = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            out.push(p);
            current = self.node(p).parent;
        }
        out
    }

    pub fn name(&self, id: ContainerId) -> &str {
        &self.node(id).options.name
    }

    /// Active tab of a tabbing container; `None` for other kinds
    pub fn active(&self, id: ContainerId) -> Option<ContainerId> {
        match &self.node(id).kind {
            ContainerKind::Tabbing(t) => t.active,
            _ => None,
        }
    }

    pub fn visible(&self, id: ContainerId) -> bool {
        match &self.node(id).kind {
            ContainerKind::View(slot) => slot.view.visible(),
            _ => self.node(id).visible,
        }
    }

    pub fn is_maximized(&self, id: ContainerId) -> bool {
        self.node(id).maximized
    }

    /// The overlay snapshot currently shown by the root, if any
    pub fn overlay(&self) -> Option<&OverlaySnapshot> {
        match &self.node(self.root).kind {
            ContainerKind::Root(r) => r.overlay.as_ref(),
            _ => None,
        }
    }

    /// Renderable handle of a leaf container's view
    pub fn view_node(&self, id: ContainerId) -> Option<NodeHandle> {
        match &self.node(id).kind {
            ContainerKind::View(slot) => Some(slot.view.node()),
            _ => None,
        }
    }

    /// Ratio weights of a sequential container (normalized to sum 1)
    pub fn ratios(&self, id: ContainerId) -> &[f32] {
        match &self.node(id).kind {
            ContainerKind::Sequential(s) => &s.ratios,
            _ => &[],
        }
    }

    /// Drag payload for a header drag, or `None` for fixed layouts
    pub fn drag_payload(&self, id: ContainerId) -> Option<DragPayload> {
        let node = self.node(id);
        if node.options.fixed_layout {
            return None;
        }
        Some(DragPayload {
            mime: CONTAINER_MIME,
            container: id,
            label: node.options.name.clone(),
        })
    }

    // ---- size negotiation --------------------------------------------------

    /// Minimum size of a subtree.
    ///
    /// Tabbing shows one child at a time, so it takes the component-wise
    /// maximum; sequential splits sum along the split axis and take the
    /// maximum across it.
    pub fn min_size(&self, id: ContainerId) -> Size {
        match &self.node(id).kind {
            ContainerKind::View(slot) => slot.view.min_size(),
            ContainerKind::Tabbing(t) => t
                .children
                .iter()
                .fold(Size::ZERO, |acc, c| acc.max(self.min_size(*c))),
            ContainerKind::Sequential(s) => {
                let mut total = Size::ZERO;
                for &child in &s.children {
                    let min = self.min_size(child);
                    match s.orientation {
                        Orientation::Horizontal => {
                            total.width += min.width;
                            total.height = total.height.max(min.height);
                        }
                        Orientation::Vertical => {
                            total.width = total.width.max(min.width);
                            total.height += min.height;
                        }
                    }
                }
                total
            }
            ContainerKind::Root(r) => r
                .children
                .first()
                .map_or(Size::ZERO, |c| self.min_size(*c)),
        }
    }

    /// Notify the subtree that its available space changed.
    ///
    /// Fans out to visible views only: sequential and root reach every child,
    /// tabbing reaches the active tab.
    pub fn resized(&mut self, id: ContainerId) {
        if let ContainerKind::View(slot) = &mut self.node_mut(id).kind {
            slot.view.resized();
            return;
        }
        let targets: Vec<ContainerId> = match &self.node(id).kind {
            ContainerKind::Tabbing(t) => t.active.into_iter().collect(),
            kind => kind.children().to_vec(),
        };
        for target in targets {
            self.resized(target);
        }
    }

    // ---- listeners ---------------------------------------------------------

    pub fn add_listener(&mut self, listener: impl LayoutListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: LayoutEvent) {
        if self.quiet || self.listeners.is_empty() {
            return;
        }
        for listener in &mut self.listeners {
            listener.on_layout_event(&event);
        }
    }

    /// Run `f` without delivering events; used while building subtrees that
    /// may still be rolled back.
    pub(crate) fn with_quiet<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let prev = self.quiet;
        self.quiet = true;
        let result = f(self);
        self.quiet = prev;
        result
    }

    // ---- naming and visibility ---------------------------------------------

    /// Rename a container; a no-op if the name is unchanged
    pub fn set_name(&mut self, id: ContainerId, name: impl Into<String>) {
        let name = name.into();
        if self.node(id).options.name == name {
            return;
        }
        let old = std::mem::replace(&mut self.node_mut(id).options.name, name.clone());
        self.emit(LayoutEvent::NameChanged {
            container: id,
            old,
            new: name,
        });
        self.emit(LayoutEvent::LayoutChanged);
    }

    /// Change visibility and propagate it down the subtree.
    ///
    /// Sequential and root containers pass the value to every child; tabbing
    /// passes it to the active tab only, inactive tabs stay hidden.
    pub fn set_visible(&mut self, id: ContainerId, visible: bool) {
        if self.node(id).is_view() {
            let changed = match &mut self.node_mut(id).kind {
                ContainerKind::View(slot) => {
                    if slot.view.visible() == visible {
                        false
                    } else {
                        slot.view.set_visible(visible);
                        true
                    }
                }
                _ => unreachable!(),
            };
            if changed {
                self.emit(LayoutEvent::VisibilityChanged {
                    container: id,
                    visible,
                });
            }
            return;
        }
        if self.node(id).visible == visible {
            return;
        }
        self.node_mut(id).visible = visible;
        self.emit(LayoutEvent::VisibilityChanged {
            container: id,
            visible,
        });
        let targets: Vec<ContainerId> = match &self.node(id).kind {
            ContainerKind::Tabbing(t) => t.active.into_iter().collect(),
            kind => kind.children().to_vec(),
        };
        for target in targets {
            self.set_visible(target, visible);
        }
    }

    // ---- structural mutations ----------------------------------------------

    /// Append `child` to `parent`. The child must be detached.
    pub fn push(&mut self, parent: ContainerId, child: ContainerId) -> ContainerId {
        self.push_at(parent, child, None)
    }

    /// Insert `child` into `parent` at `index` (clamped; `None` appends)
    pub fn push_at(
        &mut self,
        parent: ContainerId,
        child: ContainerId,
        index: Option<usize>,
    ) -> ContainerId {
        self.attach(parent, child, index);
        tracing::debug!("pushed container {:?} into {:?}", child, parent);
        self.emit(LayoutEvent::LayoutChanged);
        child
    }

    /// Insert `child` relative to `reference` according to the drop area.
    ///
    /// Sequential parents insert before or after the reference sibling
    /// (`Center` is a precondition violation there); tabbing parents append a
    /// tab; the root has a single slot and ignores `reference` and `area`.
    pub fn place(
        &mut self,
        parent: ContainerId,
        child: ContainerId,
        reference: ContainerId,
        area: DropArea,
    ) -> ContainerId {
        match &self.node(parent).kind {
            ContainerKind::Sequential(_) => {
                assert!(
                    area != DropArea::Center,
                    "sequential containers do not accept center drops"
                );
                let index = self.child_index(parent, reference) + usize::from(area.is_after());
                self.push_at(parent, child, Some(index))
            }
            ContainerKind::Tabbing(_) | ContainerKind::Root(_) => self.push(parent, child),
            ContainerKind::View(_) => panic!("cannot place into a view container"),
        }
    }

    /// Detach `child` from its parent, collapsing the parent if it drops
    /// below its structural floor. The child stays alive and can be placed
    /// elsewhere (drag and drop re-docking).
    pub fn remove(&mut self, child: ContainerId) -> ContainerId {
        let parent = self
            .node(child)
            .parent
            .unwrap_or_else(|| panic!("remove: container {:?} is not attached", child));
        self.unlink(parent, child);
        tracing::debug!("removed container {:?} from {:?}", child, parent);
        self.collapse_if_needed(parent);
        self.emit(LayoutEvent::LayoutChanged);
        child
    }

    /// Swap `old` for `new` preserving position (and active-tab status).
    /// `old` ends up detached but alive.
    pub fn replace(&mut self, old: ContainerId, new: ContainerId) -> ContainerId {
        let parent = self
            .node(old)
            .parent
            .unwrap_or_else(|| panic!("replace: container {:?} is not attached", old));
        assert!(
            self.node(new).parent.is_none(),
            "replace: container {:?} is already attached",
            new
        );
        let index = self.child_index(parent, old);
        let was_active =
            matches!(&self.node(parent).kind, ContainerKind::Tabbing(t) if t.active == Some(old));
        self.detach(parent, old);
        self.attach(parent, new, Some(index));
        if was_active {
            if let ContainerKind::Tabbing(t) = &mut self.node_mut(parent).kind {
                t.active = Some(new);
            }
            self.emit(LayoutEvent::ActiveChanged {
                container: parent,
                old: Some(old),
                new: Some(new),
            });
            let visible = self.node(parent).visible;
            self.set_visible(new, visible);
        }
        tracing::debug!("replaced {:?} with {:?} in {:?}", old, new, parent);
        self.emit(LayoutEvent::LayoutChanged);
        new
    }

    /// Assign the root's single subtree: pushes when empty, replaces otherwise
    pub fn set_root(&mut self, child: ContainerId) -> ContainerId {
        if let Some(current) = self.root_child() {
            self.replace(current, child)
        } else {
            self.push(self.root, child)
        }
    }

    /// Destroy a subtree: detach it, then release every wrapped view.
    ///
    /// Detachment happens before view destruction so no parent ever observes
    /// a destroyed-but-attached child. Idempotent for unknown ids, so
    /// listeners reacting to destroy notifications stay safe.
    pub fn destroy(&mut self, id: ContainerId) {
        if !self.contains(id) {
            return;
        }
        let subtree = self.collect_subtree(id);
        for &container in &subtree {
            self.emit(LayoutEvent::Destroyed { container });
        }
        if self.node(id).parent.is_some() {
            self.remove(id);
        }
        for &container in subtree.iter().rev() {
            if let Some(node) = self.nodes.get_mut(&container) {
                if let ContainerKind::View(slot) = &mut node.kind {
                    slot.view.destroy();
                }
            }
            self.drop_node(container);
        }
        tracing::debug!("destroyed container {:?} ({} nodes)", id, subtree.len());
        self.emit(LayoutEvent::LayoutChanged);
    }

    /// Close request from a header control; ignored for fixed containers
    pub fn request_close(&mut self, id: ContainerId) {
        if self.node(id).options.fixed {
            tracing::debug!("ignoring close request for fixed container {:?}", id);
            return;
        }
        self.destroy(id);
    }

    /// Destroy all children of `parent`, iterating over a snapshot so
    /// listeners may mutate the sequence meanwhile
    pub fn clear(&mut self, parent: ContainerId) {
        let children: Vec<ContainerId> = self.children(parent).to_vec();
        for child in children {
            self.destroy(child);
        }
    }

    // ---- active tab --------------------------------------------------------

    /// Activate a tab. The child must belong to the tabbing container;
    /// re-activating the current tab is a no-op.
    pub fn set_active(&mut self, tabs: ContainerId, child: ContainerId) {
        assert!(
            self.children(tabs).contains(&child),
            "set_active: {:?} is not a child of {:?}",
            child,
            tabs
        );
        self.change_active(tabs, Some(child));
    }

    pub(crate) fn change_active(&mut self, tabs: ContainerId, new: Option<ContainerId>) {
        let (old, tabs_visible) = {
            let node = self.node(tabs);
            match &node.kind {
                ContainerKind::Tabbing(t) => (t.active, node.visible),
                _ => panic!("active is only defined for tabbing containers"),
            }
        };
        if old == new {
            return;
        }
        if let ContainerKind::Tabbing(t) = &mut self.node_mut(tabs).kind {
            t.active = new;
        }
        self.emit(LayoutEvent::ActiveChanged {
            container: tabs,
            old,
            new,
        });
        if let Some(old_child) = old {
            if self.contains(old_child) && self.node(old_child).parent == Some(tabs) {
                self.set_visible(old_child, false);
            }
        }
        if let Some(new_child) = new {
            self.set_visible(new_child, tabs_visible);
        }
    }

    // ---- maximize / restore ------------------------------------------------

    /// Toggle the maximize state of a container.
    ///
    /// Maximizing records an overlay snapshot on the root and leaves the live
    /// subtree untouched; restoring removes the snapshot. Only one container
    /// is maximized at a time, so maximizing a second one restores the first.
    pub fn toggle_maximized(&mut self, id: ContainerId) {
        if self.node(id).maximized {
            self.node_mut(id).maximized = false;
            if matches!(self.overlay(), Some(overlay) if overlay.container == id) {
                self.clear_overlay();
            }
            self.emit(LayoutEvent::Restore { container: id });
        } else {
            if let Some(current) = self.overlay().map(|overlay| overlay.container) {
                self.toggle_maximized(current);
            }
            self.node_mut(id).maximized = true;
            let label = self.node(id).options.name.clone();
            let nodes = self
                .find_all(id, |c| c.is_view())
                .into_iter()
                .filter_map(|v| self.view_node(v))
                .collect();
            if let ContainerKind::Root(r) = &mut self.node_mut(self.root).kind {
                r.overlay = Some(OverlaySnapshot {
                    container: id,
                    label,
                    nodes,
                });
            }
            self.emit(LayoutEvent::Maximize { container: id });
        }
    }

    /// Cancel input (e.g. Escape) while a view is maximized: restore it
    pub fn cancel(&mut self) {
        if let Some(current) = self.overlay().map(|overlay| overlay.container) {
            self.toggle_maximized(current);
        }
    }

    fn clear_overlay(&mut self) {
        if let ContainerKind::Root(r) = &mut self.node_mut(self.root).kind {
            r.overlay = None;
        }
    }

    // ---- traversal ---------------------------------------------------------

    /// First container in the subtree (pre-order, including `from`) matching
    /// the predicate
    pub fn find(
        &self,
        from: ContainerId,
        predicate: impl Fn(&Container) -> bool,
    ) -> Option<ContainerId> {
        self.find_inner(from, &predicate)
    }

    fn find_inner(
        &self,
        from: ContainerId,
        predicate: &dyn Fn(&Container) -> bool,
    ) -> Option<ContainerId> {
        let node = self.get(from)?;
        if predicate(node) {
            return Some(from);
        }
        for &child in node.kind.children() {
            if let Some(found) = self.find_inner(child, predicate) {
                return Some(found);
            }
        }
        None
    }

    /// Container with the given id within the subtree rooted at `from`
    pub fn find_by_id(&self, from: ContainerId, id: ContainerId) -> Option<ContainerId> {
        self.find(from, |c| c.id() == id)
    }

    /// Every container in the subtree (pre-order, including `from`) matching
    /// the predicate
    pub fn find_all(
        &self,
        from: ContainerId,
        predicate: impl Fn(&Container) -> bool,
    ) -> Vec<ContainerId> {
        let mut out = Vec::new();
        self.find_all_inner(from, &predicate, &mut out);
        out
    }

    fn find_all_inner(
        &self,
        from: ContainerId,
        predicate: &dyn Fn(&Container) -> bool,
        out: &mut Vec<ContainerId>,
    ) {
        let Some(node) = self.get(from) else {
            return;
        };
        if predicate(node) {
            out.push(from);
        }
        for &child in node.kind.children() {
            self.find_all_inner(child, predicate, out);
        }
    }

    /// First ancestor (strictly above `from`) matching the predicate
    pub fn closest(
        &self,
        from: ContainerId,
        predicate: impl Fn(&Container) -> bool,
    ) -> Option<ContainerId> {
        let mut current = self.node(from).parent;
        while let Some(p) = current {
            if predicate(self.node(p)) {
                return Some(p);
            }
            current = self.node(p).parent;
        }
        None
    }

    // ---- ratios ------------------------------------------------------------

    /// Move the separators of a sequential container: one positive weight per
    /// child, stored normalized
    pub fn set_ratios(&mut self, id: ContainerId, ratios: &[f32]) {
        {
            let node = self.node_mut(id);
            let s = match &mut node.kind {
                ContainerKind::Sequential(s) => s,
                _ => panic!("ratios only apply to sequential containers"),
            };
            assert_eq!(ratios.len(), s.children.len(), "one ratio per child");
            assert!(ratios.iter().all(|r| *r > 0.0), "ratios must be positive");
            s.ratios = ratios.to_vec();
            rebalance(&mut s.ratios);
        }
        self.resized(id);
        self.emit(LayoutEvent::LayoutChanged);
    }

    // ---- internals ---------------------------------------------------------

    pub(crate) fn node(&self, id: ContainerId) -> &Container {
        self.nodes
            .get(&id)
            .unwrap_or_else(|| panic!("unknown container id {:?}", id))
    }

    fn node_mut(&mut self, id: ContainerId) -> &mut Container {
        self.nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("unknown container id {:?}", id))
    }

    fn child_index(&self, parent: ContainerId, child: ContainerId) -> usize {
        self.node(parent)
            .kind
            .children()
            .iter()
            .position(|c| *c == child)
            .unwrap_or_else(|| panic!("container {:?} is not a child of {:?}", child, parent))
    }

    fn attach(&mut self, parent: ContainerId, child: ContainerId, index: Option<usize>) {
        assert!(parent != child, "cannot attach a container to itself");
        assert!(
            self.node(child).parent.is_none(),
            "container {:?} is already attached; remove it first",
            child
        );
        let parent_visible = self.node(parent).visible;
        let mut tab_auto_active = false;
        {
            let node = self.node_mut(parent);
            match &mut node.kind {
                ContainerKind::Sequential(s) => {
                    let idx = index.unwrap_or(s.children.len()).min(s.children.len());
                    s.children.insert(idx, child);
                    let weight = if s.ratios.is_empty() {
                        1.0
                    } else {
                        s.ratios.iter().sum::<f32>() / s.ratios.len() as f32
                    };
                    s.ratios.insert(idx, weight);
                    rebalance(&mut s.ratios);
                }
                ContainerKind::Tabbing(t) => {
                    let idx = index.unwrap_or(t.children.len()).min(t.children.len());
                    t.children.insert(idx, child);
                    tab_auto_active = t.active.is_none();
                }
                ContainerKind::Root(r) => {
                    let idx = index.unwrap_or(r.children.len()).min(r.children.len());
                    r.children.insert(idx, child);
                }
                ContainerKind::View(_) => panic!("cannot push into a view container"),
            }
        }
        self.node_mut(child).parent = Some(parent);
        if matches!(self.node(parent).kind, ContainerKind::Tabbing(_)) {
            if tab_auto_active {
                self.change_active(parent, Some(child));
            }
            let active = self.active(parent);
            self.set_visible(child, active == Some(child) && parent_visible);
        } else {
            self.set_visible(child, parent_visible);
        }
    }

    fn detach(&mut self, parent: ContainerId, child: ContainerId) {
        let index = self.child_index(parent, child);
        match &mut self.node_mut(parent).kind {
            ContainerKind::Sequential(s) => {
                s.children.remove(index);
                s.ratios.remove(index);
                rebalance(&mut s.ratios);
            }
            ContainerKind::Tabbing(t) => {
                t.children.remove(index);
            }
            ContainerKind::Root(r) => {
                r.children.remove(index);
            }
            ContainerKind::View(_) => unreachable!("view containers have no children"),
        }
        self.node_mut(child).parent = None;
    }

    /// Detach including the tabbing active handoff
    fn unlink(&mut self, parent: ContainerId, child: ContainerId) {
        if matches!(self.node(parent).kind, ContainerKind::Tabbing(_)) {
            self.retarget_active(parent, child);
        }
        self.detach(parent, child);
    }

    /// Before removing the active tab, hand activity to a sibling: the next
    /// one when the leaving tab is first, the previous one otherwise
    fn retarget_active(&mut self, tabs: ContainerId, leaving: ContainerId) {
        let next = match &self.node(tabs).kind {
            ContainerKind::Tabbing(t) => {
                if t.active != Some(leaving) {
                    return;
                }
                let index = t
                    .children
                    .iter()
                    .position(|c| *c == leaving)
                    .unwrap_or_else(|| {
                        panic!("active tab {:?} is not a child of {:?}", leaving, tabs)
                    });
                if t.children.len() == 1 {
                    None
                } else if index == 0 {
                    Some(t.children[1])
                } else {
                    Some(t.children[index - 1])
                }
            }
            _ => return,
        };
        self.change_active(tabs, next);
    }

    /// Fold a container that dropped below its structural floor.
    ///
    /// An empty container detaches itself (and the check cascades to its
    /// parent); one left with a single child replaces itself with that child
    /// in its own parent. Detached containers are left alone as transient
    /// state.
    fn collapse_if_needed(&mut self, id: ContainerId) {
        if !self.contains(id) {
            return;
        }
        let (min, len, parent) = {
            let node = self.node(id);
            (
                node.kind.min_child_count(),
                node.kind.children().len(),
                node.parent,
            )
        };
        if len >= min {
            return;
        }
        match (len, parent) {
            (0, Some(parent)) => {
                tracing::debug!("container {:?} is empty, folding it away", id);
                self.unlink(parent, id);
                self.drop_node(id);
                self.collapse_if_needed(parent);
            }
            (1, Some(_)) => {
                let only = self.node(id).kind.children()[0];
                tracing::debug!("container {:?} collapsed into its last child {:?}", id, only);
                self.detach(id, only);
                self.replace(id, only);
                self.drop_node(id);
            }
            _ => {}
        }
    }

    pub(crate) fn drop_node(&mut self, id: ContainerId) {
        if matches!(self.overlay(), Some(overlay) if overlay.container == id) {
            self.clear_overlay();
        }
        self.nodes.remove(&id);
    }

    fn collect_subtree(&self, id: ContainerId) -> Vec<ContainerId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.node(current).kind.children().iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (id, node) in &self.nodes {
            for &child in node.kind.children() {
                assert_eq!(
                    self.node(child).parent,
                    Some(*id),
                    "child {:?} of {:?} has a stale parent reference",
                    child,
                    id
                );
            }
            if let Some(parent) = node.parent {
                assert!(
                    self.node(parent).kind.children().contains(id),
                    "parent {:?} does not list {:?} as a child",
                    parent,
                    id
                );
            }
            match &node.kind {
                ContainerKind::Tabbing(t) => {
                    if let Some(active) = t.active {
                        assert!(t.children.contains(&active), "active tab is not a child");
                    }
                }
                ContainerKind::Sequential(s) => {
                    assert_eq!(s.ratios.len(), s.children.len(), "ratio per child");
                }
                _ => {}
            }
        }
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

fn rebalance(ratios: &mut [f32]) {
    let sum: f32 = ratios.iter().sum();
    if sum > 0.0 {
        for r in ratios.iter_mut() {
            *r /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct ViewProbe {
        visible: bool,
        resizes: usize,
        destroyed: bool,
    }

    struct TestView {
        node: NodeHandle,
        min: Size,
        probe: Rc<RefCell<ViewProbe>>,
    }

    impl View for TestView {
        fn node(&self) -> NodeHandle {
            self.node
        }

        fn visible(&self) -> bool {
            self.probe.borrow().visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.probe.borrow_mut().visible = visible;
        }

        fn min_size(&self) -> Size {
            self.min
        }

        fn resized(&mut self) {
            self.probe.borrow_mut().resizes += 1;
        }

        fn destroy(&mut self) {
            self.probe.borrow_mut().destroyed = true;
        }
    }

    fn view(tree: &mut LayoutTree, name: &str) -> ContainerId {
        sized_view(tree, name, Size::ZERO).0
    }

    fn sized_view(
        tree: &mut LayoutTree,
        name: &str,
        min: Size,
    ) -> (ContainerId, Rc<RefCell<ViewProbe>>) {
        let probe = Rc::new(RefCell::new(ViewProbe::default()));
        let id = tree.new_view(
            name,
            Box::new(TestView {
                node: NodeHandle::new(0),
                min,
                probe: Rc::clone(&probe),
            }),
        );
        (id, probe)
    }

    fn record_events(tree: &mut LayoutTree) -> Rc<RefCell<Vec<LayoutEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        tree.add_listener(move |event: &LayoutEvent| sink.borrow_mut().push(event.clone()));
        log
    }

    fn split_with_children(tree: &mut LayoutTree, count: usize) -> (ContainerId, Vec<ContainerId>) {
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let children: Vec<ContainerId> = (0..count)
            .map(|i| {
                let v = view(tree, &format!("v{}", i));
                tree.push(split, v)
            })
            .collect();
        (split, children)
    }

    #[test]
    fn test_push_sets_parent_and_preserves_order() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 3);
        assert_eq!(tree.children(split), &children[..]);
        for &child in &children {
            assert_eq!(tree.parent(child), Some(split));
        }
        tree.assert_consistent();
    }

    #[test]
    fn test_place_right_inserts_after_reference() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 3);
        let dropped = view(&mut tree, "dropped");
        tree.place(split, dropped, children[1], DropArea::Right);
        assert_eq!(
            tree.children(split),
            &[children[0], children[1], dropped, children[2]]
        );
        tree.assert_consistent();
    }

    #[test]
    fn test_place_left_inserts_at_reference() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 2);
        let dropped = view(&mut tree, "dropped");
        tree.place(split, dropped, children[0], DropArea::Left);
        assert_eq!(tree.children(split)[0], dropped);
    }

    #[test]
    #[should_panic(expected = "center drops")]
    fn test_place_center_in_split_panics() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 2);
        let dropped = view(&mut tree, "dropped");
        tree.place(split, dropped, children[0], DropArea::Center);
    }

    #[test]
    #[should_panic(expected = "already attached")]
    fn test_push_attached_child_panics() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 2);
        tree.push(split, children[0]);
    }

    #[test]
    fn test_removed_child_can_be_redocked() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 3);
        let moved = tree.remove(children[0]);
        assert_eq!(tree.parent(moved), None);
        assert!(tree.contains(moved));
        tree.place(split, moved, children[2], DropArea::Bottom);
        assert_eq!(tree.children(split), &[children[1], children[2], moved]);
        tree.assert_consistent();
    }

    #[test]
    fn test_split_collapses_into_last_child() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 2);
        tree.remove(children[0]);
        assert!(!tree.contains(split));
        assert_eq!(tree.root_child(), Some(children[1]));
        assert_eq!(tree.parent(children[1]), Some(tree.root()));
        tree.assert_consistent();
    }

    #[test]
    fn test_collapse_cascades_through_empty_lineup() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("outer"));
        tree.set_root(split);
        let lineup = tree.new_lineup(
            Orientation::Vertical,
            false,
            ContainerOptions::named("inner"),
        );
        tree.push(split, lineup);
        let keeper = view(&mut tree, "keeper");
        tree.push(split, keeper);
        let lonely = view(&mut tree, "lonely");
        tree.push(lineup, lonely);

        tree.remove(lonely);

        // the empty lineup folded away, which left the split with one child,
        // which folded away in turn
        assert!(!tree.contains(lineup));
        assert!(!tree.contains(split));
        assert_eq!(tree.root_child(), Some(keeper));
        tree.assert_consistent();
    }

    #[test]
    fn test_lineup_survives_with_single_child() {
        let mut tree = LayoutTree::new();
        let lineup = tree.new_lineup(
            Orientation::Horizontal,
            false,
            ContainerOptions::named("lineup"),
        );
        tree.set_root(lineup);
        let a = view(&mut tree, "a");
        let b = view(&mut tree, "b");
        tree.push(lineup, a);
        tree.push(lineup, b);
        tree.remove(a);
        assert!(tree.contains(lineup));
        assert_eq!(tree.children(lineup), &[b]);
    }

    #[test]
    fn test_tabbing_first_push_becomes_active() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let (b, probe_b) = sized_view(&mut tree, "b", Size::ZERO);
        tree.push(tabs, a);
        tree.push(tabs, b);
        assert_eq!(tree.active(tabs), Some(a));
        assert!(probe_a.borrow().visible);
        assert!(!probe_b.borrow().visible);
    }

    #[test]
    fn test_tabbing_remove_first_active_selects_next() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let a = view(&mut tree, "a");
        let b = view(&mut tree, "b");
        let c = view(&mut tree, "c");
        tree.push(tabs, a);
        tree.push(tabs, b);
        tree.push(tabs, c);
        assert_eq!(tree.active(tabs), Some(a));
        tree.remove(a);
        assert_eq!(tree.active(tabs), Some(b));
        tree.assert_consistent();
    }

    #[test]
    fn test_tabbing_remove_last_active_selects_previous() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let a = view(&mut tree, "a");
        let b = view(&mut tree, "b");
        let c = view(&mut tree, "c");
        tree.push(tabs, a);
        tree.push(tabs, b);
        tree.push(tabs, c);
        tree.set_active(tabs, c);
        tree.remove(c);
        assert_eq!(tree.active(tabs), Some(b));
    }

    #[test]
    fn test_tabbing_remove_only_child_clears_active() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let a = view(&mut tree, "a");
        tree.push(tabs, a);
        tree.remove(a);
        assert_eq!(tree.active(tabs), None);
        assert!(tree.contains(tabs));
        assert!(tree.children(tabs).is_empty());
    }

    #[test]
    fn test_set_active_switches_visibility_and_fires_event() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let (b, probe_b) = sized_view(&mut tree, "b", Size::ZERO);
        tree.push(tabs, a);
        tree.push(tabs, b);
        let log = record_events(&mut tree);

        tree.set_active(tabs, b);
        assert!(!probe_a.borrow().visible);
        assert!(probe_b.borrow().visible);
        assert!(log.borrow().contains(&LayoutEvent::ActiveChanged {
            container: tabs,
            old: Some(a),
            new: Some(b),
        }));

        // re-activating is a no-op
        log.borrow_mut().clear();
        tree.set_active(tabs, b);
        assert!(log.borrow().is_empty());
    }

    #[test]
    #[should_panic(expected = "not a child")]
    fn test_set_active_non_child_panics() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let stranger = view(&mut tree, "stranger");
        tree.set_active(tabs, stranger);
    }

    #[test]
    fn test_min_size_tabbing_is_component_wise_max() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let (a, _) = sized_view(&mut tree, "a", Size::new(100.0, 50.0));
        let (b, _) = sized_view(&mut tree, "b", Size::new(80.0, 120.0));
        tree.push(tabs, a);
        tree.push(tabs, b);
        assert_eq!(tree.min_size(tabs), Size::new(100.0, 120.0));
    }

    #[test]
    fn test_min_size_horizontal_split_sums_widths() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let (a, _) = sized_view(&mut tree, "a", Size::new(100.0, 50.0));
        let (b, _) = sized_view(&mut tree, "b", Size::new(80.0, 120.0));
        tree.push(split, a);
        tree.push(split, b);
        assert_eq!(tree.min_size(split), Size::new(180.0, 120.0));
        // root delegates to its only child
        assert_eq!(tree.min_size(tree.root()), Size::new(180.0, 120.0));
    }

    #[test]
    fn test_min_size_vertical_split_sums_heights() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Vertical, ContainerOptions::named("split"));
        tree.set_root(split);
        let (a, _) = sized_view(&mut tree, "a", Size::new(100.0, 50.0));
        let (b, _) = sized_view(&mut tree, "b", Size::new(80.0, 120.0));
        tree.push(split, a);
        tree.push(split, b);
        assert_eq!(tree.min_size(split), Size::new(100.0, 170.0));
    }

    #[test]
    fn test_visibility_reaches_all_split_children() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let (b, probe_b) = sized_view(&mut tree, "b", Size::ZERO);
        tree.push(split, a);
        tree.push(split, b);
        assert!(probe_a.borrow().visible);
        assert!(probe_b.borrow().visible);

        tree.set_visible(split, false);
        assert!(!probe_a.borrow().visible);
        assert!(!probe_b.borrow().visible);
    }

    #[test]
    fn test_visibility_reaches_only_active_tab() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let (b, probe_b) = sized_view(&mut tree, "b", Size::ZERO);
        tree.push(tabs, a);
        tree.push(tabs, b);

        tree.set_visible(tabs, false);
        assert!(!probe_a.borrow().visible);
        tree.set_visible(tabs, true);
        assert!(probe_a.borrow().visible);
        // the inactive tab never becomes visible
        assert!(!probe_b.borrow().visible);
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 3);
        let incoming = view(&mut tree, "incoming");
        tree.replace(children[1], incoming);
        assert_eq!(tree.children(split), &[children[0], incoming, children[2]]);
        assert_eq!(tree.parent(children[1]), None);
        assert!(tree.contains(children[1]));
        tree.assert_consistent();
    }

    #[test]
    fn test_replace_active_tab_hands_over_activity() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let a = view(&mut tree, "a");
        let b = view(&mut tree, "b");
        tree.push(tabs, a);
        tree.push(tabs, b);
        let (incoming, probe) = sized_view(&mut tree, "incoming", Size::ZERO);
        tree.replace(a, incoming);
        assert_eq!(tree.active(tabs), Some(incoming));
        assert!(probe.borrow().visible);
    }

    #[test]
    fn test_set_root_is_single_slot() {
        let mut tree = LayoutTree::new();
        let first = view(&mut tree, "first");
        let second = view(&mut tree, "second");
        tree.set_root(first);
        assert_eq!(tree.root_child(), Some(first));
        tree.set_root(second);
        assert_eq!(tree.root_child(), Some(second));
        assert_eq!(tree.children(tree.root()).len(), 1);
        assert_eq!(tree.parent(first), None);
    }

    #[test]
    fn test_destroy_detaches_then_destroys_view() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let b = view(&mut tree, "b");
        tree.push(split, a);
        tree.push(split, b);

        tree.destroy(a);
        assert!(!tree.contains(a));
        assert!(probe_a.borrow().destroyed);
        // collapse kicked in as with a plain remove
        assert!(!tree.contains(split));
        assert_eq!(tree.root_child(), Some(b));
        tree.assert_consistent();
    }

    #[test]
    fn test_destroy_fires_destroyed_for_whole_subtree() {
        let mut tree = LayoutTree::new();
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.set_root(tabs);
        let a = view(&mut tree, "a");
        let b = view(&mut tree, "b");
        tree.push(tabs, a);
        tree.push(tabs, b);
        let log = record_events(&mut tree);

        tree.destroy(tabs);
        let destroyed: Vec<ContainerId> = log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                LayoutEvent::Destroyed { container } => Some(*container),
                _ => None,
            })
            .collect();
        assert_eq!(destroyed, vec![tabs, a, b]);
        assert!(tree.root_child().is_none());
    }

    #[test]
    fn test_request_close_ignores_fixed_containers() {
        let mut tree = LayoutTree::new();
        let mut options = ContainerOptions::named("pinned");
        options.fixed = true;
        let tabs = tree.new_tabbing(options);
        tree.set_root(tabs);
        tree.request_close(tabs);
        assert!(tree.contains(tabs));

        let free = view(&mut tree, "free");
        tree.push(tabs, free);
        tree.request_close(free);
        assert!(!tree.contains(free));
    }

    #[test]
    fn test_drag_payload_respects_fixed_layout() {
        let mut tree = LayoutTree::new();
        let draggable = view(&mut tree, "draggable");
        let payload = tree.drag_payload(draggable).unwrap();
        assert_eq!(payload.mime, CONTAINER_MIME);
        assert_eq!(payload.container, draggable);
        assert_eq!(payload.label, "draggable");

        let mut options = ContainerOptions::named("pinned");
        options.fixed_layout = true;
        let pinned = tree.new_view_with(
            options,
            Box::new(TestView {
                node: NodeHandle::new(0),
                min: Size::ZERO,
                probe: Rc::default(),
            }),
        );
        assert!(tree.drag_payload(pinned).is_none());
    }

    #[test]
    fn test_maximize_is_additive_and_reversible() {
        let mut tree = LayoutTree::new();
        let (split, children) = split_with_children(&mut tree, 2);
        let before = tree.persist(tree.root());

        tree.toggle_maximized(children[0]);
        assert!(tree.is_maximized(children[0]));
        let overlay = tree.overlay().unwrap();
        assert_eq!(overlay.container, children[0]);
        // the live tree is untouched while maximized
        assert_eq!(tree.persist(tree.root()), before);
        assert_eq!(tree.children(split), &children[..]);

        tree.toggle_maximized(children[0]);
        assert!(!tree.is_maximized(children[0]));
        assert!(tree.overlay().is_none());
        assert_eq!(tree.persist(tree.root()), before);
    }

    #[test]
    fn test_maximizing_second_container_restores_first() {
        let mut tree = LayoutTree::new();
        let (_, children) = split_with_children(&mut tree, 2);
        tree.toggle_maximized(children[0]);
        tree.toggle_maximized(children[1]);
        assert!(!tree.is_maximized(children[0]));
        assert!(tree.is_maximized(children[1]));
        assert_eq!(tree.overlay().unwrap().container, children[1]);
    }

    #[test]
    fn test_cancel_restores_maximized_container() {
        let mut tree = LayoutTree::new();
        let (_, children) = split_with_children(&mut tree, 2);
        tree.toggle_maximized(children[1]);
        let log = record_events(&mut tree);
        tree.cancel();
        assert!(tree.overlay().is_none());
        assert!(!tree.is_maximized(children[1]));
        assert!(log
            .borrow()
            .contains(&LayoutEvent::Restore {
                container: children[1]
            }));
        // a second cancel has nothing to restore
        tree.cancel();
    }

    #[test]
    fn test_name_change_fires_once_and_noops_on_same_value() {
        let mut tree = LayoutTree::new();
        let a = view(&mut tree, "alpha");
        let log = record_events(&mut tree);
        tree.set_name(a, "beta");
        assert_eq!(
            log.borrow()
                .iter()
                .filter(|e| matches!(e, LayoutEvent::NameChanged { .. }))
                .count(),
            1
        );
        log.borrow_mut().clear();
        tree.set_name(a, "beta");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_find_all_is_preorder() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.push(split, tabs);
        let a = view(&mut tree, "a");
        tree.push(tabs, a);
        let b = view(&mut tree, "b");
        tree.push(split, b);

        let all = tree.find_all(tree.root(), |_| true);
        assert_eq!(all, vec![tree.root(), split, tabs, a, b]);
    }

    #[test]
    fn test_find_and_closest() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.push(split, tabs);
        let a = view(&mut tree, "needle");
        tree.push(tabs, a);
        let b = view(&mut tree, "hay");
        tree.push(split, b);

        assert_eq!(tree.find(tree.root(), |c| c.name() == "needle"), Some(a));
        assert_eq!(tree.find_by_id(tree.root(), b), Some(b));
        assert_eq!(tree.find(tabs, |c| c.name() == "hay"), None);

        // closest walks strictly upward
        assert_eq!(tree.closest(a, |c| c.type_name() == "split"), Some(split));
        assert_eq!(tree.closest(a, |c| c.name() == "needle"), None);
        assert_eq!(tree.parents(a), vec![tabs, split, tree.root()]);
    }

    #[test]
    fn test_ratios_stay_normalized() {
        let mut tree = LayoutTree::new();
        let (split, _) = split_with_children(&mut tree, 3);
        let sum: f32 = tree.ratios(split).iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);

        tree.set_ratios(split, &[2.0, 1.0, 1.0]);
        assert_eq!(tree.ratios(split), &[0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_resized_reaches_visible_views_only() {
        let mut tree = LayoutTree::new();
        let split = tree.new_split(Orientation::Horizontal, ContainerOptions::named("split"));
        tree.set_root(split);
        let tabs = tree.new_tabbing(ContainerOptions::named("tabs"));
        tree.push(split, tabs);
        let (a, probe_a) = sized_view(&mut tree, "a", Size::ZERO);
        let (b, probe_b) = sized_view(&mut tree, "b", Size::ZERO);
        tree.push(tabs, a);
        tree.push(tabs, b);
        let (c, probe_c) = sized_view(&mut tree, "c", Size::ZERO);
        tree.push(split, c);

        tree.resized(tree.root());
        assert_eq!(probe_a.borrow().resizes, 1);
        assert_eq!(probe_b.borrow().resizes, 0);
        assert_eq!(probe_c.borrow().resizes, 1);
    }
}
