// game/src/events.rs
pub mod enter_map_finish;
pub mod init_scene_start;
pub mod login_finish;
pub mod register_finish;

use std::sync::Arc;
use ui_core::event::event_bus::EventBus;
use crate::event_id;

/// Registers every event handler with the bus, explicitly. Handlers that
/// share an identifier fire in the order they appear here.
pub fn register_event_handlers(bus: &EventBus) {
    bus.on(event_id::INIT_SCENE_START, Arc::new(init_scene_start::CreateLoginUi));
    bus.on(event_id::LOGIN_FINISH, Arc::new(login_finish::RemoveLoginUi));
    bus.on(event_id::LOGIN_FINISH, Arc::new(login_finish::CreateLobbyUi));
    bus.on(event_id::REGISTER_FINISH, Arc::new(register_finish::RemoveRegisterUi));
    bus.on(event_id::ENTER_MAP_FINISH, Arc::new(enter_map_finish::RemoveLobbyUi));
}
