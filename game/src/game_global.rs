// game/src/game_global.rs
use crate::game_state::GameState;
use std::cell::RefCell;
use std::rc::Rc;
use ui_core::event::event_bus::EventBus;

/// Global services for the `GameState`.
pub struct GameServices {
    pub game_state: RefCell<Option<GameState>>, // set once at startup
    pub events: EventBus,
}

impl GameServices {
    pub fn new() -> Self {
        Self {
            game_state: RefCell::new(None),
            events: EventBus::default(),
        }
    }
}

thread_local! {
    static GAME_SERVICES: Rc<GameServices> = Rc::new(GameServices::new());
}

/// Store the `GameState` in global services.
pub fn set_game(game: GameState) {
    GAME_SERVICES.with(|services| {
        *services.game_state.borrow_mut() = Some(game);
    });
}

/// Gets read access to the `GameState`.
pub fn with_game_state<F, R>(f: F) -> R
where
    F: FnOnce(&GameState) -> R,
{
    GAME_SERVICES.with(|services| {
        let opt = services.game_state.borrow();
        let game_state = opt
            .as_ref()
            .expect("GameState not initialised");
        f(game_state)
    })
}

/// Gets mutable access to the `GameState`.
pub fn with_game_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut GameState) -> R,
{
    GAME_SERVICES.with(|services| {
        let mut opt = services.game_state.borrow_mut();
        let game_state = opt
            .as_mut()
            .expect("GameState not initialised");
        f(game_state)
    })
}

/// Returns a handle to the shared event bus.
pub fn event_bus() -> EventBus {
    GAME_SERVICES.with(|services| services.events.clone())
}

/// Publish `event` on the shared bus. Must not be called from inside a
/// `with_game_state*` closure; handlers take their own borrow of the state.
pub fn emit_event(event: &str) -> Result<(), String> {
    event_bus().emit(event)
}
