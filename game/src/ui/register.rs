// game/src/ui/register.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::ui::ui::{UiController, UiId};
use crate::game_state::GameState;
use crate::ui_type;

/// Widgets the registration window wires up on creation.
pub struct RegisterController {
    pub account: UiId,
    pub password: UiId,
    /// Second password field that must match the first.
    pub confirm: UiId,
    pub register_btn: UiId,
}

impl UiController for RegisterController {}

/// Creates the account registration window under the UI root.
pub fn create_register_ui(game: &mut GameState) -> Result<UiId, String> {
    game.resources.load_bundle(&bundle_key(ui_type::UI_REGISTER));

    let window = game.ui.create(ui_type::UI_REGISTER)?;
    let scene = game.ui.scene_mut();

    let account = scene
        .get_child(window, "Account")
        .ok_or_else(|| "Register prefab has no 'Account' child.".to_string())?;
    let password = scene
        .get_child(window, "Password")
        .ok_or_else(|| "Register prefab has no 'Password' child.".to_string())?;
    let confirm = scene
        .get_child(window, "Confirm")
        .ok_or_else(|| "Register prefab has no 'Confirm' child.".to_string())?;
    let register_btn = scene
        .get_child(window, "Btn_Register")
        .ok_or_else(|| "Register prefab has no 'Btn_Register' child.".to_string())?;

    scene.set_as_first_sibling(window);
    scene.attach_controller(
        window,
        RegisterController { account, password, confirm, register_btn },
    );

    Ok(window)
}
