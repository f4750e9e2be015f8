//! Event sinks: where committed operations publish their notifications.

use std::sync::{RwLock, RwLockReadGuard};

use crate::events::Event;

/// Receives events after the emitting operation committed.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// In-memory event log for testing and development.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all events (for testing/debugging).
    pub fn get_all(&self) -> Vec<Event> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock still holds every event pushed before the panic.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        self.events
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for InMemoryEventLog {
    fn emit(&self, event: Event) {
        let mut events = self
            .events
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        events.push(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: Event) {
        tracing::info!(kind = %event.kind, payload = %event.to_json(), "event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[test]
    fn log_keeps_emission_order() {
        let log = InMemoryEventLog::new();
        assert!(log.is_empty());

        log.emit(Event::new(EventKind::NewGameCreated).with("game-index", 1));
        log.emit(Event::new(EventKind::GameRejected).with("game-index", 1));

        let kinds: Vec<_> = log.get_all().into_iter().map(|event| event.kind).collect();
        assert_eq!(kinds, vec![EventKind::NewGameCreated, EventKind::GameRejected]);
        assert_eq!(log.len(), 2);
    }
}
