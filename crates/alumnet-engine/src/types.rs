//! Value types shared across the engine.
//!
//! `Event` mirrors the platform's persisted event record; everything else is
//! ephemeral, produced and consumed within a single engine call. All types
//! serialize to the platform's JSON-default wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted event, read-only to the engine.
///
/// `participant_count` is derived elsewhere (join/leave operations) and is
/// treated as a snapshot. The store guarantees `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub organizer_id: u64,
    /// Category tag; `None` for uncategorized events.
    pub major_id: Option<u64>,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub participant_count: u32,
}

/// A trial `[start, end)` slot considered during best-time search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Desirability of the slot's start hour, per the fixed lookup table.
    pub score: u32,
}

/// Result of a best-time search.
///
/// `best == None` means every candidate in the horizon conflicted with an
/// existing event ("fully booked"); `alternatives` is empty in that case.
/// Callers must check `best` rather than assume a suggestion exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub best: Option<CandidateSlot>,
    /// Up to 3 near-best choices (score within 80% of the best), descending
    /// by score. Does not repeat the best slot itself.
    pub alternatives: Vec<CandidateSlot>,
}

/// One event's popularity ranking entry. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityResult {
    pub event_id: u64,
    pub name: String,
    pub participant_count: u32,
    /// `participant_count × time_factor`; used only for ordering.
    pub score: f64,
}

/// One phase of a generated event agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
}
