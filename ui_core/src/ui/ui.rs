// ui_core/src/ui/ui.rs
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use crate::host::visual_host::{HostNodeId, VisualHost};
use crate::storage::ui_config::ui_layer;

/// Id of one logical UI node inside a [`UiScene`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct UiId(pub usize);

impl UiId {
    /// A sentinal value that can be used for optionals.
    pub fn null() -> Self {
        UiId(0)
    }
}

impl std::ops::Deref for UiId {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Behavior object owned by exactly one UI node. Concrete controllers are
/// recovered by downcast, so the trait only has to carry `Any`.
pub trait UiController: Any {}

/// One logical UI element wrapping a host visual node.
pub struct Ui {
    /// Immutable after creation; unique among siblings.
    name: String,
    /// Backing visual node. Exactly one live node owns a given handle.
    handle: Option<HostNodeId>,
    /// Named children. Lookup order is irrelevant; disposal visits all.
    children: HashMap<String, UiId>,
    /// Non-owning link, used only for upward traversal.
    parent: Option<UiId>,
    /// Main controller component for the node.
    controller: Option<Box<dyn UiController>>,
    disposed: bool,
}

impl Ui {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> Option<HostNodeId> {
        self.handle
    }

    pub fn parent(&self) -> Option<UiId> {
        self.parent
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }
}

/// The logical UI tree: an id arena of [`Ui`] records over a host scene
/// graph. The tree may be incomplete relative to the host side; host
/// children materialize on first logical access, not eagerly.
pub struct UiScene {
    nodes: HashMap<UiId, Ui>,
    /// Counter for node ids. Starts from 1.
    next_id: usize,
    host: Arc<dyn VisualHost>,
}

impl UiScene {
    pub fn new(host: Arc<dyn VisualHost>) -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
            host,
        }
    }

    /// Create a fresh host visual node called `name` under `parent_handle`
    /// and wrap it as an Active UI node.
    pub fn create(&mut self, name: &str, parent_handle: Option<HostNodeId>) -> Result<UiId, String> {
        let handle = self.host.create_node(parent_handle, name)?;
        Ok(self.awake(name, handle))
    }

    /// Wrap an existing host visual node without creating one (adoption).
    /// The caller must make sure no other live node owns `handle`.
    pub fn adopt(&mut self, name: &str, handle: HostNodeId) -> UiId {
        self.awake(name, handle)
    }

    /// Registers `child` under its name. The child keeps a non-owning link
    /// back to `parent`.
    pub fn add_child(&mut self, parent: UiId, child: UiId) {
        self.active(parent);

        let record = self.active(child);
        assert!(
            record.parent.is_none(),
            "UI node '{}' already has a parent.",
            record.name
        );
        let child_name = record.name.clone();

        let parent_record = self.nodes.get_mut(&parent).unwrap();
        assert!(
            !parent_record.children.contains_key(&child_name),
            "UI node '{}' already has a child called '{child_name}'.",
            parent_record.name
        );
        parent_record.children.insert(child_name, child);
        self.nodes.get_mut(&child).unwrap().parent = Some(parent);
    }

    /// Unlinks and disposes the child called `name`. Unknown names are a
    /// no-op.
    pub fn remove_child(&mut self, parent: UiId, name: &str) {
        self.active(parent);

        let parent_record = self.nodes.get_mut(&parent).unwrap();
        let Some(child) = parent_record.children.remove(name) else {
            return;
        };
        self.dispose(child);
    }

    /// Returns the child called `name`, adopting it from the host side when
    /// the logical tree has not materialized it yet. Returns `None` when
    /// neither side knows the name; absence is not an error.
    pub fn get_child(&mut self, parent: UiId, name: &str) -> Option<UiId> {
        let record = self.active(parent);

        if let Some(&child) = record.children.get(name) {
            return Some(child);
        }

        let parent_handle = record.handle.expect("Active UI node without a handle.");
        let found = self.host.find_child(parent_handle, name)?;

        let child = self.adopt(name, found);
        self.add_child(parent, child);
        Some(child)
    }

    /// Disposes the node: children first (recursively), then the backing
    /// host node is destroyed, and the record becomes terminally Disposed.
    /// Disposing twice is a no-op. A node disposed directly unlinks itself
    /// from a still-live parent.
    pub fn dispose(&mut self, id: UiId) {
        let Some(record) = self.nodes.get_mut(&id) else {
            return;
        };
        if record.disposed {
            return;
        }

        record.disposed = true;
        record.controller = None;
        let name = record.name.clone();
        let handle = record.handle.take();
        let parent = record.parent.take();
        let children: Vec<UiId> = record.children.drain().map(|(_, child)| child).collect();

        for child in children {
            self.dispose(child);
        }

        if let Some(handle) = handle {
            self.host.destroy_node(handle);
        }

        if let Some(parent) = parent {
            if let Some(parent_record) = self.nodes.get_mut(&parent) {
                if !parent_record.disposed {
                    parent_record.children.remove(&name);
                }
            }
        }
    }

    /// Moves the backing host node to the front of its siblings in display
    /// order. The logical child map is unaffected.
    pub fn set_as_first_sibling(&self, id: UiId) {
        let record = self.active(id);
        if let Some(handle) = record.handle {
            self.host.reorder_first(handle);
        }
    }

    /// Attach the main controller. A node owns at most one; attaching a
    /// second is a programmer error.
    pub fn attach_controller<C: UiController>(&mut self, id: UiId, controller: C) -> &mut C {
        let record = self.active_mut(id);
        assert!(
            record.controller.is_none(),
            "UI node '{}' already has a controller.",
            record.name
        );

        record.controller = Some(Box::new(controller));

        let any: &mut dyn Any = record.controller.as_deref_mut().unwrap();
        any.downcast_mut::<C>().unwrap()
    }

    /// Returns the controller downcast to its concrete type, or `None` when
    /// the node has no controller of that type.
    pub fn controller<C: UiController>(&self, id: UiId) -> Option<&C> {
        let any: &dyn Any = self.node(id).controller.as_deref()?;
        any.downcast_ref::<C>()
    }

    pub fn controller_mut<C: UiController>(&mut self, id: UiId) -> Option<&mut C> {
        let any: &mut dyn Any = self.node_mut(id).controller.as_deref_mut()?;
        any.downcast_mut::<C>()
    }

    /// Read access to a node record.
    pub fn node(&self, id: UiId) -> &Ui {
        self.nodes.get(&id).expect("Unknown UiId.")
    }

    fn node_mut(&mut self, id: UiId) -> &mut Ui {
        self.nodes.get_mut(&id).expect("Unknown UiId.")
    }

    fn active(&self, id: UiId) -> &Ui {
        let record = self.node(id);
        assert!(!record.disposed, "UI node '{}' is disposed.", record.name);
        record
    }

    fn active_mut(&mut self, id: UiId) -> &mut Ui {
        let record = self.node_mut(id);
        assert!(!record.disposed, "UI node '{}' is disposed.", record.name);
        record
    }

    /// Awake path shared by creation and adoption: tag the backing node
    /// with the UI layer and wrap it as an Active record.
    fn awake(&mut self, name: &str, handle: HostNodeId) -> UiId {
        self.host.set_layer(handle, &ui_layer());

        self.next_id += 1;
        let id = UiId(self.next_id);

        self.nodes.insert(id, Ui {
            name: name.to_string(),
            handle: Some(handle),
            children: HashMap::new(),
            parent: None,
            controller: None,
            disposed: false,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::headless_host::HeadlessHost;

    struct PanelController {
        clicks: u32,
    }

    impl UiController for PanelController {}

    struct OtherController;

    impl UiController for OtherController {}

    fn scene() -> (UiScene, Arc<HeadlessHost>) {
        let host = Arc::new(HeadlessHost::new());
        (UiScene::new(host.clone()), host)
    }

    fn child_of(scene: &mut UiScene, parent: UiId, name: &str) -> UiId {
        let parent_handle = scene.node(parent).handle();
        let child = scene.create(name, parent_handle).unwrap();
        scene.add_child(parent, child);
        child
    }

    #[test]
    fn awake_tags_the_ui_layer() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();

        let handle = scene.node(root).handle().unwrap();
        assert_eq!(host.layer_of(handle), Some("UI".to_string()));
    }

    #[test]
    fn add_then_get_roundtrip() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();
        let panel = child_of(&mut scene, root, "Panel");

        assert_eq!(scene.get_child(root, "Panel"), Some(panel));
        assert_eq!(scene.node(panel).name(), "Panel");
        assert_eq!(scene.node(panel).parent(), Some(root));
    }

    #[test]
    #[should_panic]
    fn duplicate_child_name_panics() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();
        child_of(&mut scene, root, "Panel");

        let twin = scene.create("Panel", None).unwrap();
        scene.add_child(root, twin);
    }

    #[test]
    fn remove_absent_child_is_a_noop() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();

        scene.remove_child(root, "Panel");
        assert_eq!(scene.node(root).child_count(), 0);
    }

    #[test]
    fn remove_child_disposes_the_subtree() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();
        let panel = child_of(&mut scene, root, "Panel");
        let button = child_of(&mut scene, panel, "Button");
        let button_handle = scene.node(button).handle().unwrap();

        scene.remove_child(root, "Panel");

        assert!(scene.node(panel).is_disposed());
        assert!(scene.node(button).is_disposed());
        assert!(!host.node_exists(button_handle));
        assert_eq!(scene.get_child(root, "Panel"), None);
    }

    #[test]
    fn dispose_is_idempotent() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();
        child_of(&mut scene, root, "Panel");

        scene.dispose(root);
        let live_after_first = host.live_count();

        scene.dispose(root);

        assert!(scene.node(root).is_disposed());
        assert_eq!(scene.node(root).child_count(), 0);
        assert_eq!(scene.node(root).handle(), None);
        assert_eq!(host.live_count(), live_after_first);
    }

    #[test]
    fn dispose_reaches_every_descendant() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();
        let panel = child_of(&mut scene, root, "Panel");
        let left = child_of(&mut scene, panel, "Left");
        let right = child_of(&mut scene, panel, "Right");

        scene.dispose(root);

        for id in [root, panel, left, right] {
            assert!(scene.node(id).is_disposed());
        }
        assert_eq!(host.live_count(), 0);
    }

    #[test]
    fn directly_disposed_child_unlinks_from_its_parent() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();
        let panel = child_of(&mut scene, root, "Panel");

        scene.dispose(panel);

        assert!(!scene.node(root).has_child("Panel"));
        assert_eq!(scene.get_child(root, "Panel"), None);
    }

    #[test]
    fn get_child_adopts_a_host_side_child_once() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();
        let root_handle = scene.node(root).handle().unwrap();

        // Host-side content the logical tree has never seen.
        let icon_handle = host.create_node(Some(root_handle), "Icon").unwrap();
        let live_before = host.live_count();

        let icon = scene.get_child(root, "Icon").expect("Adoption failed.");

        assert_eq!(scene.node(icon).handle(), Some(icon_handle));
        assert_eq!(host.layer_of(icon_handle), Some("UI".to_string()));
        // A second lookup returns the same node; nothing new materializes.
        assert_eq!(scene.get_child(root, "Icon"), Some(icon));
        assert_eq!(host.live_count(), live_before);
    }

    #[test]
    fn get_child_returns_none_when_neither_side_knows_the_name() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();

        assert_eq!(scene.get_child(root, "Ghost"), None);
    }

    #[test]
    #[should_panic]
    fn get_child_on_a_disposed_node_panics() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();
        scene.dispose(root);

        scene.get_child(root, "Panel");
    }

    #[test]
    fn set_as_first_sibling_reorders_the_host_side_only() {
        let (mut scene, host) = scene();
        let root = scene.create("Root", None).unwrap();
        let first = child_of(&mut scene, root, "First");
        let second = child_of(&mut scene, root, "Second");
        let root_handle = scene.node(root).handle().unwrap();
        let second_handle = scene.node(second).handle().unwrap();

        scene.set_as_first_sibling(second);

        assert_eq!(host.children_of(root_handle)[0], second_handle);
        // Logical lookups are unaffected.
        assert_eq!(scene.get_child(root, "First"), Some(first));
        assert_eq!(scene.get_child(root, "Second"), Some(second));
    }

    #[test]
    fn controller_attach_and_downcast() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();

        scene.attach_controller(root, PanelController { clicks: 0 }).clicks = 3;

        assert_eq!(scene.controller::<PanelController>(root).unwrap().clicks, 3);
        assert!(scene.controller::<OtherController>(root).is_none());

        scene.controller_mut::<PanelController>(root).unwrap().clicks += 1;
        assert_eq!(scene.controller::<PanelController>(root).unwrap().clicks, 4);
    }

    #[test]
    #[should_panic]
    fn second_controller_panics() {
        let (mut scene, _host) = scene();
        let root = scene.create("Root", None).unwrap();

        scene.attach_controller(root, PanelController { clicks: 0 });
        scene.attach_controller(root, OtherController);
    }
}
