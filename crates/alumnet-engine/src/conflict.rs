//! Conflict detection against an organizer's existing events.
//!
//! The event list is expected to be pre-scoped to a single organizer (the
//! store fetches per organizer), so the check is a linear scan with an
//! optional id exclusion for reschedules.

use crate::interval::Interval;
use crate::types::Event;

/// True iff any event other than `exclude_event_id` overlaps the candidate
/// interval.
///
/// Pass `exclude_event_id = None` for a brand-new event (nothing excluded);
/// pass `Some(id)` when rescheduling so the event does not conflict with its
/// own current slot.
///
/// Pure and deterministic; O(n) in the organizer's event count.
pub fn has_conflict(events: &[Event], exclude_event_id: Option<u64>, candidate: &Interval) -> bool {
    events
        .iter()
        .filter(|e| Some(e.id) != exclude_event_id)
        .any(|e| candidate.overlaps_range(e.start_time, e.end_time))
}
