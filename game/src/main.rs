use std::sync::Arc;
use game_lib::event_id;
use game_lib::events::register_event_handlers;
use game_lib::game_global::{emit_event, event_bus, set_game, with_game_state};
use game_lib::game_state::GameState;
use game_lib::ui_type;
use ui_core::host::headless_host::HeadlessHost;
use ui_core::logging::logging::init_file_logger;
use ui_core::storage::ui_config::save_config;
use ui_core::{onscreen_error, onscreen_info, onscreen_warn};

fn main() {
    init_file_logger();

    // Write the config file out on first run so the defaults are editable.
    if let Err(e) = save_config() {
        onscreen_warn!("Could not save the ui config: {e}.");
    }

    // A stand-in scene graph carrying the window prefabs the demo flow uses.
    let host = Arc::new(HeadlessHost::new());
    host.define_prefab(ui_type::UI_LOGIN, &["Account", "Password", "Btn_Login"]);
    host.define_prefab(ui_type::UI_REGISTER, &["Account", "Password", "Confirm", "Btn_Register"]);
    host.define_prefab(ui_type::UI_LOBBY, &["Btn_EnterMap"]);

    let game = GameState::new(host).expect("Unable to create the game state.");
    set_game(game);
    register_event_handlers(&event_bus());

    // Scene ready: the login window appears.
    drive(event_id::INIT_SCENE_START);
    log_windows();

    // The server confirmed the login: login goes away, the lobby comes up.
    drive(event_id::LOGIN_FINISH);
    log_windows();

    // Entering the map clears the lobby again.
    drive(event_id::ENTER_MAP_FINISH);
    log_windows();
}

fn drive(event: &str) {
    onscreen_info!("-> {event}");
    if let Err(e) = emit_event(event) {
        onscreen_error!("Event '{event}' failed: {e}");
    }
}

fn log_windows() {
    with_game_state(|game| {
        let root = game.ui.root();
        let count = game.ui.scene().node(root).child_count();
        onscreen_info!("Top-level windows: {count}.");
    });
}
