pub mod event_id;
pub mod events;
pub mod game_global;
pub mod game_state;
pub mod ui;
pub mod ui_type;
