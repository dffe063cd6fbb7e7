// game/src/game_state.rs
use std::sync::Arc;
use ui_core::assets::bundle_manager::BundleManager;
use ui_core::host::visual_host::VisualHost;
use ui_core::ui::ui_manager::UiManager;

pub struct GameState {
    /// Top-level UI windows.
    pub ui: UiManager,
    /// Asset bundles currently held by the UI.
    pub resources: BundleManager,
}

impl GameState {
    /// Builds the game state over the injected host scene graph.
    pub fn new(host: Arc<dyn VisualHost>) -> Result<Self, String> {
        Ok(Self {
            ui: UiManager::new(host)?,
            resources: BundleManager::new(),
        })
    }
}
