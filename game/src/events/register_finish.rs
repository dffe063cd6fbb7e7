// game/src/events/register_finish.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::event::event_bus::EventHandler;
use crate::game_global::with_game_state_mut;
use crate::ui_type;

/// Tears down the registration window once the server confirms the account.
pub struct RemoveRegisterUi;

impl EventHandler for RemoveRegisterUi {
    fn run(&self) -> Result<(), String> {
        with_game_state_mut(|game| {
            game.ui.remove(ui_type::UI_REGISTER);
            game.resources.unload_bundle(&bundle_key(ui_type::UI_REGISTER));
        });
        Ok(())
    }
}
