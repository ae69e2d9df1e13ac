//! Read-only access to the platform's event records.
//!
//! The engine deliberately does not see the platform's generic repository
//! layer; its only persistence dependency is these three bulk/by-id reads.
//! Timeouts, retries, and transactions are the implementor's concern.

use crate::error::Result;
use crate::types::Event;

/// Narrow read contract over the external event store.
pub trait EventStore {
    /// All events owned by the given organizer.
    fn events_by_organizer(&self, organizer_id: u64) -> Result<Vec<Event>>;

    /// A single event by id, `None` when no such event exists.
    fn event_by_id(&self, id: u64) -> Result<Option<Event>>;

    /// All events, optionally restricted to one category tag.
    fn all_events(&self, major_filter: Option<u64>) -> Result<Vec<Event>>;
}

/// In-memory store over a fixed event list.
///
/// Used by the test suite and by embedders that already hold the events in
/// memory. Preserves insertion order, which is the order the ranking and
/// similarity operations see.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventStore for MemoryStore {
    fn events_by_organizer(&self, organizer_id: u64) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .cloned()
            .collect())
    }

    fn event_by_id(&self, id: u64) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }

    fn all_events(&self, major_filter: Option<u64>) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| major_filter.map_or(true, |m| e.major_id == Some(m)))
            .cloned()
            .collect())
    }
}
