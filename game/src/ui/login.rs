// game/src/ui/login.rs
use ui_core::assets::bundle_manager::bundle_key;
use ui_core::ui::ui::{UiController, UiId};
use crate::game_state::GameState;
use crate::ui_type;

/// Widgets the login window wires up on creation.
pub struct LoginController {
    /// Account name input field.
    pub account: UiId,
    /// Password input field.
    pub password: UiId,
    /// Button that submits the login request.
    pub login_btn: UiId,
}

impl UiController for LoginController {}

/// Creates the login window under the UI root and wires up its prefab
/// children.
pub fn create_login_ui(game: &mut GameState) -> Result<UiId, String> {
    game.resources.load_bundle(&bundle_key(ui_type::UI_LOGIN));

    let window = game.ui.create(ui_type::UI_LOGIN)?;
    let scene = game.ui.scene_mut();

    let account = scene
        .get_child(window, "Account")
        .ok_or_else(|| "Login prefab has no 'Account' child.".to_string())?;
    let password = scene
        .get_child(window, "Password")
        .ok_or_else(|| "Login prefab has no 'Password' child.".to_string())?;
    let login_btn = scene
        .get_child(window, "Btn_Login")
        .ok_or_else(|| "Login prefab has no 'Btn_Login' child.".to_string())?;

    scene.set_as_first_sibling(window);
    scene.attach_controller(window, LoginController { account, password, login_btn });

    Ok(window)
}
