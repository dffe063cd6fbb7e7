// ui_core/src/event/event_bus.rs
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

/// The capability every event consumer implements: run with no arguments
/// when the identifier it registered under is published. Handlers that act
/// on game state reach it through their own accessors; the bus carries no
/// payload.
pub trait EventHandler {
    fn run(&self) -> Result<(), String>;
}

/// Event dispatcher that maps identifier strings to handler lists.
#[derive(Default, Clone)]
pub struct EventBus {
    /// Maps an event name to its handlers, in registration order.
    listeners: Arc<Mutex<HashMap<String, Vec<Arc<dyn EventHandler>>>>>,
}

impl EventBus {
    /// Register a handler for `event`. Handlers fire in registration order
    /// and stay registered for the life of the bus.
    pub fn on(&self, event: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event = event.into();
        assert!(!event.is_empty(), "Event identifier must not be empty.");

        let mut map = self.listeners.lock().unwrap();
        map.entry(event).or_default().push(handler);
    }

    /// Emit an event. Every handler registered under `event` runs
    /// synchronously, in registration order; an identifier nobody
    /// registered for is a no-op.
    ///
    /// There is no isolation between handlers: the first error is returned
    /// to the emitter as-is and aborts delivery to the handlers registered
    /// after it. The list is snapshotted before the first call, so a handler
    /// may emit further events itself; nothing guards against event cycles.
    pub fn emit(&self, event: &str) -> Result<(), String> {
        let handlers: Vec<Arc<dyn EventHandler>> = {
            let map = self.listeners.lock().unwrap();
            match map.get(event) {
                Some(list) => list.clone(),
                None => return Ok(()),
            }
        };

        for handler in handlers {
            handler.run()?;
        }
        Ok(())
    }

    /// Number of handlers currently registered under `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        let map = self.listeners.lock().unwrap();
        map.get(event).map_or(0, |list| list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        tag: &'static str,
        seen: Rc<RefCell<Vec<&'static str>>>,
    }

    impl EventHandler for Recorder {
        fn run(&self) -> Result<(), String> {
            self.seen.borrow_mut().push(self.tag);
            Ok(())
        }
    }

    struct Failing;

    impl EventHandler for Failing {
        fn run(&self) -> Result<(), String> {
            Err("boom".to_string())
        }
    }

    struct Chain {
        bus: EventBus,
    }

    impl EventHandler for Chain {
        fn run(&self) -> Result<(), String> {
            self.bus.emit("Second")
        }
    }

    #[test]
    fn emit_without_handlers_is_a_noop() {
        let bus = EventBus::default();
        assert!(bus.emit("LoginFinish").is_ok());
        assert_eq!(bus.handler_count("LoginFinish"), 0);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.on("LoginFinish", Arc::new(Recorder { tag: "H1", seen: seen.clone() }));
        bus.on("LoginFinish", Arc::new(Recorder { tag: "H2", seen: seen.clone() }));
        bus.emit("LoginFinish").unwrap();

        assert_eq!(*seen.borrow(), vec!["H1", "H2"]);
    }

    #[test]
    fn failing_handler_aborts_later_delivery() {
        let bus = EventBus::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.on("Fail", Arc::new(Recorder { tag: "before", seen: seen.clone() }));
        bus.on("Fail", Arc::new(Failing));
        bus.on("Fail", Arc::new(Recorder { tag: "after", seen: seen.clone() }));

        assert_eq!(bus.emit("Fail"), Err("boom".to_string()));
        assert_eq!(*seen.borrow(), vec!["before"]);
    }

    #[test]
    fn handlers_may_emit_recursively() {
        let bus = EventBus::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        bus.on("First", Arc::new(Chain { bus: bus.clone() }));
        bus.on("Second", Arc::new(Recorder { tag: "chained", seen: seen.clone() }));
        bus.emit("First").unwrap();

        assert_eq!(*seen.borrow(), vec!["chained"]);
    }

    #[test]
    #[should_panic]
    fn empty_identifier_is_rejected() {
        let bus = EventBus::default();
        bus.on("", Arc::new(Failing));
    }
}
