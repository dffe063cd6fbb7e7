// game/src/event_id.rs

// Identifiers shared by event producers and consumers. The strings are the
// contract between decoupled modules; renaming one silently orphans every
// handler registered under it.

/// The initial scene finished loading.
pub const INIT_SCENE_START: &str = "InitSceneStart";

/// The server confirmed the login.
pub const LOGIN_FINISH: &str = "LoginFinish";

/// The server confirmed the account registration.
pub const REGISTER_FINISH: &str = "RegisterFinish";

/// The player entered the map.
pub const ENTER_MAP_FINISH: &str = "EnterMapFinish";
