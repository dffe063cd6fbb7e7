// game/src/events/enter_map_finish.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::event::event_bus::EventHandler;
use crate::game_global::with_game_state_mut;
use crate::ui_type;

/// Clears the lobby once the player is on the map.
pub struct RemoveLobbyUi;

impl EventHandler for RemoveLobbyUi {
    fn run(&self) -> Result<(), String> {
        with_game_state_mut(|game| {
            game.ui.remove(ui_type::UI_LOBBY);
            game.resources.unload_bundle(&bundle_key(ui_type::UI_LOBBY));
        });
        Ok(())
    }
}
