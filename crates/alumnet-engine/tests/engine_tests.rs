//! Tests for the `SchedulingEngine` facade over an in-memory store.

use alumnet_engine::{EngineError, Event, MemoryStore, SchedulingEngine};
use chrono::{DateTime, Utc};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn event(id: u64, organizer_id: u64, start: &str, end: &str) -> Event {
    Event {
        id,
        organizer_id,
        major_id: None,
        name: format!("Event {id}"),
        start_time: ts(start),
        end_time: ts(end),
        location: "Main Hall".to_string(),
        description: String::new(),
        participant_count: 0,
    }
}

fn engine(events: Vec<Event>) -> SchedulingEngine<MemoryStore> {
    SchedulingEngine::new(MemoryStore::new(events))
}

#[test]
fn check_conflict_detects_overlap_with_sibling_event() {
    // Organizer 1 owns events 1 and 2; moving event 2 onto event 1 conflicts.
    let eng = engine(vec![
        event(1, 1, "2025-01-10T10:00:00Z", "2025-01-10T12:00:00Z"),
        event(2, 1, "2025-01-10T14:00:00Z", "2025-01-10T15:00:00Z"),
    ]);

    let conflicting = eng
        .check_conflict(2, ts("2025-01-10T11:00:00Z"), ts("2025-01-10T13:00:00Z"))
        .unwrap();

    assert!(conflicting);
}

#[test]
fn check_conflict_ignores_the_event_itself() {
    // Event 1's new slot overlaps only its own current slot.
    let eng = engine(vec![event(1, 1, "2025-01-10T10:00:00Z", "2025-01-10T12:00:00Z")]);

    let conflicting = eng
        .check_conflict(1, ts("2025-01-10T11:00:00Z"), ts("2025-01-10T13:00:00Z"))
        .unwrap();

    assert!(!conflicting);
}

#[test]
fn check_conflict_touching_boundary_is_clear() {
    let eng = engine(vec![
        event(1, 1, "2025-01-10T10:00:00Z", "2025-01-10T12:00:00Z"),
        event(2, 1, "2025-01-11T10:00:00Z", "2025-01-11T12:00:00Z"),
    ]);

    let conflicting = eng
        .check_conflict(2, ts("2025-01-10T12:00:00Z"), ts("2025-01-10T13:00:00Z"))
        .unwrap();

    assert!(!conflicting);
}

#[test]
fn check_conflict_ignores_other_organizers() {
    // Organizer 2's event occupies the slot, but conflicts are per organizer.
    let eng = engine(vec![
        event(1, 1, "2025-01-10T10:00:00Z", "2025-01-10T12:00:00Z"),
        event(2, 2, "2025-01-12T10:00:00Z", "2025-01-12T12:00:00Z"),
    ]);

    let conflicting = eng
        .check_conflict(1, ts("2025-01-12T10:00:00Z"), ts("2025-01-12T12:00:00Z"))
        .unwrap();

    assert!(!conflicting);
}

#[test]
fn check_conflict_unknown_event_is_not_found() {
    let eng = engine(vec![]);

    let err = eng
        .check_conflict(99, ts("2025-01-10T10:00:00Z"), ts("2025-01-10T11:00:00Z"))
        .unwrap_err();

    assert!(matches!(err, EngineError::NotFound(99)));
}

#[test]
fn check_conflict_rejects_inverted_interval() {
    let eng = engine(vec![event(1, 1, "2025-01-10T10:00:00Z", "2025-01-10T12:00:00Z")]);

    let err = eng
        .check_conflict(1, ts("2025-01-10T13:00:00Z"), ts("2025-01-10T11:00:00Z"))
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidInterval(_)));
}

#[test]
fn suggest_best_time_only_sees_the_organizers_events() {
    // Organizer 2 is fully booked, organizer 1 is free.
    let eng = engine(vec![event(1, 2, "2025-03-01T00:00:00Z", "2025-05-01T00:00:00Z")]);
    let now = ts("2025-03-03T12:00:00Z");

    let free = eng.suggest_best_time_at(1, 2, now).unwrap();
    assert!(free.best.is_some());

    let booked = eng.suggest_best_time_at(2, 2, now).unwrap();
    assert!(booked.best.is_none());
}

#[test]
fn similar_events_unknown_source_is_not_found() {
    let eng = engine(vec![]);

    let err = eng.similar_events(42, 5).unwrap_err();

    assert!(matches!(err, EngineError::NotFound(42)));
}

#[test]
fn similar_events_searches_across_organizers() {
    let mut source = event(1, 1, "2025-06-01T10:00:00Z", "2025-06-01T12:00:00Z");
    source.major_id = Some(7);
    let mut other = event(2, 9, "2025-06-05T10:00:00Z", "2025-06-05T12:00:00Z");
    other.major_id = Some(7);

    let eng = engine(vec![source, other]);

    let similar = eng.similar_events(1, 5).unwrap();

    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].id, 2);
}

#[test]
fn events_by_popularity_ranks_all_stored_events() {
    let mut a = event(1, 1, "2025-06-10T10:00:00Z", "2025-06-10T12:00:00Z");
    a.participant_count = 10;
    let mut b = event(2, 2, "2025-07-15T10:00:00Z", "2025-07-15T12:00:00Z");
    b.participant_count = 10;

    let eng = engine(vec![a, b]);
    let now = ts("2025-06-01T00:00:00Z");

    let ranked = eng.events_by_popularity_at(2, now).unwrap();

    // Event 2 starts more than 30 days out and gets the boost.
    assert_eq!(ranked[0].event_id, 2);
    assert!((ranked[0].score - 12.0).abs() < 1e-9);
}

#[test]
fn suggested_timeline_scales_from_the_facade() {
    let eng = engine(vec![]);
    let start = ts("2025-09-01T10:00:00Z");

    let entries = eng.suggested_timeline(start, 4.5).unwrap();

    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].start, start);
    assert_eq!(entries[4].end, start + chrono::Duration::minutes(270));
}

#[test]
fn suggestion_serializes_to_json() {
    let eng = engine(vec![]);
    let now = ts("2025-03-03T12:00:00Z");

    let suggestion = eng.suggest_best_time_at(1, 2, now).unwrap();
    let json = serde_json::to_value(&suggestion).unwrap();

    assert!(json["best"]["start"].is_string());
    assert_eq!(json["best"]["score"], 5);
    assert!(json["alternatives"].is_array());
}
