// ui_core/src/storage/ui_config.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use ron::from_str;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use directories_next::ProjectDirs;
use once_cell::sync::Lazy;
use crate::constants::{DEFAULT_UI_LAYER, UI_CONFIG_RON};
use crate::onscreen_error;

pub static UI_CONFIG: Lazy<RwLock<UiConfig>> = Lazy::new(|| RwLock::new(load_config()));

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Override for the scene-graph layer freshly awoken nodes are tagged with.
    pub ui_layer: Option<String>,
}

/// Saves the ui config .ron file from the in memory config.
pub fn save_config() -> Result<(), Box<dyn Error>> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = UI_CONFIG.read()?;
    let ron = to_string_pretty(&*config, PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}

/// Returns the layer name for freshly awoken nodes: the configured
/// override, or the default when none is set (or the lock is poisoned).
pub fn ui_layer() -> String {
    match UI_CONFIG.read() {
        Ok(config) => config
            .ui_layer
            .clone()
            .unwrap_or_else(|| DEFAULT_UI_LAYER.to_string()),
        Err(e) => {
            onscreen_error!("Could not read config: {e}.");
            DEFAULT_UI_LAYER.to_string()
        }
    }
}

/// Returns the app_dir for the program.
pub fn app_dir() -> PathBuf {
    if let Some(project_dir) = ProjectDirs::from("com", "rook", "ui") {
        project_dir.config_dir().to_path_buf()
    }
    else {
        onscreen_error!("Could not resolve app directory.");
        panic!("Could not resolve app directory.");
    }
}

fn config_path() -> PathBuf {
    app_dir().join(UI_CONFIG_RON)
}

fn load_config() -> UiConfig {
    let path = config_path();

    match fs::read_to_string(&path) {
        Ok(txt) => from_str(&txt).unwrap_or_default(),
        Err(_) => UiConfig::default(),
    }
}
