// ui_core/src/ui/ui_manager.rs
use std::sync::Arc;
use crate::constants::UI_ROOT_NAME;
use crate::host::visual_host::VisualHost;
use crate::ui::ui::{UiId, UiScene};

/// Owns the logical UI tree and manages named top-level windows under a
/// single root node.
pub struct UiManager {
    scene: UiScene,
    root: UiId,
}

impl UiManager {
    /// Creates the manager and its root node at the host scene root.
    pub fn new(host: Arc<dyn VisualHost>) -> Result<Self, String> {
        let mut scene = UiScene::new(host);
        let root = scene.create(UI_ROOT_NAME, None)?;
        Ok(Self { scene, root })
    }

    pub fn root(&self) -> UiId {
        self.root
    }

    /// Creates a fresh window called `ui_type` under the root.
    pub fn create(&mut self, ui_type: &str) -> Result<UiId, String> {
        let root_handle = self
            .scene
            .node(self.root)
            .handle()
            .ok_or_else(|| "UI root has no backing node.".to_string())?;

        let window = self.scene.create(ui_type, Some(root_handle))?;
        self.scene.add_child(self.root, window);
        Ok(window)
    }

    /// Registers an externally created window under the root.
    pub fn add(&mut self, window: UiId) {
        self.scene.add_child(self.root, window);
    }

    /// Removes and disposes the window called `ui_type`. Unknown names are
    /// a no-op.
    pub fn remove(&mut self, ui_type: &str) {
        self.scene.remove_child(self.root, ui_type);
    }

    /// Looks up (or lazily adopts) the window called `ui_type`.
    pub fn get(&mut self, ui_type: &str) -> Option<UiId> {
        self.scene.get_child(self.root, ui_type)
    }

    /// Raises the window called `ui_type` to the front of the display order.
    pub fn set_top(&mut self, ui_type: &str) {
        if let Some(window) = self.get(ui_type) {
            self.scene.set_as_first_sibling(window);
        }
    }

    /// Tears down the whole tree, root included.
    pub fn dispose(&mut self) {
        let root = self.root;
        self.scene.dispose(root);
    }

    pub fn scene(&self) -> &UiScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut UiScene {
        &mut self.scene
    }
}
