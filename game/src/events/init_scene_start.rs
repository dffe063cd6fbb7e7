// game/src/events/init_scene_start.rs
use ui_core::event::event_bus::EventHandler;
use crate::game_global::with_game_state_mut;
use crate::ui::login::create_login_ui;

/// Brings up the login window once the initial scene is ready.
pub struct CreateLoginUi;

impl EventHandler for CreateLoginUi {
    fn run(&self) -> Result<(), String> {
        with_game_state_mut(|game| create_login_ui(game).map(|_| ()))
    }
}
