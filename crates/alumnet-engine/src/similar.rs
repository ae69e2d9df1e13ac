//! Similar-event lookup by shared category or name keyword.

use std::cmp::Reverse;

use crate::types::Event;

/// Events similar to `source`: same category tag, or a description that
/// mentions the source event's name. The source itself is excluded; results
/// are ordered by start time descending (most recent first) and truncated to
/// `count`.
pub fn similar_events(source: &Event, candidates: &[Event], count: usize) -> Vec<Event> {
    let mut matches: Vec<Event> = candidates
        .iter()
        .filter(|e| e.id != source.id)
        .filter(|e| shares_category(source, e) || e.description.contains(&source.name))
        .cloned()
        .collect();
    matches.sort_by_key(|e| Reverse(e.start_time));
    matches.truncate(count);
    matches
}

/// Sharing a category requires both events to actually carry a tag; two
/// uncategorized events are not similar by category.
fn shares_category(source: &Event, other: &Event) -> bool {
    matches!((source.major_id, other.major_id), (Some(a), Some(b)) if a == b)
}
