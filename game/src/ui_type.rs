// game/src/ui_type.rs

/// Name of the login window.
pub const UI_LOGIN: &str = "UILogin";

/// Name of the account registration window.
pub const UI_REGISTER: &str = "UIRegister";

/// Name of the lobby window.
pub const UI_LOBBY: &str = "UILobby";
