// ui_core/src/assets/bundle_manager.rs
use std::collections::HashMap;
use log::{info, warn};
use crate::constants::BUNDLE_SUFFIX;

/// Returns the asset-bundle key for a window name.
pub fn bundle_key(name: &str) -> String {
    format!("{}{}", name.to_lowercase(), BUNDLE_SUFFIX)
}

/// Reference-counted registry of loaded asset bundles. Loading here is
/// bookkeeping only; the host's resource system owns the bytes.
#[derive(Default)]
pub struct BundleManager {
    /// Maps a bundle key to its reference count.
    loaded: HashMap<String, usize>,
}

impl BundleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a reference on `key`, loading the bundle on first use.
    pub fn load_bundle(&mut self, key: &str) {
        let count = self.loaded.entry(key.to_string()).or_insert(0);
        *count += 1;

        if *count == 1 {
            info!("Loaded bundle '{key}'.");
        }
    }

    /// Releases one reference on `key`; the bundle unloads at zero.
    /// Unloading a bundle that is not loaded logs a warning and returns.
    pub fn unload_bundle(&mut self, key: &str) {
        match self.loaded.get_mut(key) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.loaded.remove(key);
                info!("Unloaded bundle '{key}'.");
            }
            None => warn!("Bundle '{key}' is not loaded."),
        }
    }

    /// Returns true while at least one reference on `key` is held.
    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded.contains_key(key)
    }

    /// Current reference count for `key`.
    pub fn ref_count(&self, key: &str) -> usize {
        self.loaded.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased_with_the_suffix() {
        assert_eq!(bundle_key("UIRegister"), "uiregister.bundle");
    }

    #[test]
    fn references_are_counted() {
        let mut bundles = BundleManager::new();

        bundles.load_bundle("uilogin.bundle");
        bundles.load_bundle("uilogin.bundle");
        assert_eq!(bundles.ref_count("uilogin.bundle"), 2);

        bundles.unload_bundle("uilogin.bundle");
        assert!(bundles.is_loaded("uilogin.bundle"));

        bundles.unload_bundle("uilogin.bundle");
        assert!(!bundles.is_loaded("uilogin.bundle"));
    }

    #[test]
    fn unloading_an_unknown_bundle_is_a_noop() {
        let mut bundles = BundleManager::new();
        bundles.unload_bundle("ghost.bundle");
        assert_eq!(bundles.ref_count("ghost.bundle"), 0);
    }
}
