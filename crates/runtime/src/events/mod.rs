//! Events published by the runtime.
//!
//! Operations queue their events while running and hand them to the
//! configured [`EventSink`] only once every write has been committed.

mod sink;
mod types;

pub use sink::{EventSink, InMemoryEventLog, TracingEventSink};
pub use types::{Attribute, Event, EventKind, keys};
