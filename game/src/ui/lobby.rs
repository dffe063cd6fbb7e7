// game/src/ui/lobby.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::ui::ui::{UiController, UiId};
use crate::game_state::GameState;
use crate::ui_type;

/// Widgets the lobby window wires up on creation.
pub struct LobbyController {
    /// Button that moves the player onto the map.
    pub enter_map_btn: UiId,
}

impl UiController for LobbyController {}

/// Creates the lobby window under the UI root.
pub fn create_lobby_ui(game: &mut GameState) -> Result<UiId, String> {
    game.resources.load_bundle(&bundle_key(ui_type::UI_LOBBY));

    let window = game.ui.create(ui_type::UI_LOBBY)?;
    let scene = game.ui.scene_mut();

    let enter_map_btn = scene
        .get_child(window, "Btn_EnterMap")
        .ok_or_else(|| "Lobby prefab has no 'Btn_EnterMap' child.".to_string())?;

    scene.set_as_first_sibling(window);
    scene.attach_controller(window, LobbyController { enter_map_btn });

    Ok(window)
}
