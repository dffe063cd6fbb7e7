// ui_core/src/constants.rs

/// Scene-graph layer every UI node is tagged with when it awakes.
pub const DEFAULT_UI_LAYER: &str = "UI";

/// Name of the host node that parents every top-level window.
pub const UI_ROOT_NAME: &str = "UIRoot";

/// Suffix appended to a lowercased window name to form its bundle key.
pub const BUNDLE_SUFFIX: &str = ".bundle";

/// Name of the ui config .ron file.
pub const UI_CONFIG_RON: &str = "ui_config.ron";

/// Basename for the rotating log files.
pub const LOG_BASENAME: &str = "rook_ui";
