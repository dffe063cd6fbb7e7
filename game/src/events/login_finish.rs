// game/src/events/login_finish.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::event::event_bus::EventHandler;
use crate::game_global::with_game_state_mut;
use crate::ui::lobby::create_lobby_ui;
use crate::ui_type;

/// Tears down the login window once the server confirms the login.
pub struct RemoveLoginUi;

impl EventHandler for RemoveLoginUi {
    fn run(&self) -> Result<(), String> {
        with_game_state_mut(|game| {
            game.ui.remove(ui_type::UI_LOGIN);
            game.resources.unload_bundle(&bundle_key(ui_type::UI_LOGIN));
        });
        Ok(())
    }
}

/// Follows the login teardown with the lobby window.
pub struct CreateLobbyUi;

impl EventHandler for CreateLobbyUi {
    fn run(&self) -> Result<(), String> {
        with_game_state_mut(|game| create_lobby_ui(game).map(|_| ()))
    }
}
