//! Stateless facade wiring the event store to the pure scheduling modules.
//!
//! `SchedulingEngine` owns nothing but the store handle and a timezone, so a
//! single instance can serve independent callers concurrently (the store
//! decides its own `Sync`-ness). Each entry point performs at most two store
//! reads and one pure computation; nothing is cached or retried here.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::conflict::has_conflict;
use crate::error::{EngineError, Result};
use crate::interval::Interval;
use crate::popularity::rank_by_popularity;
use crate::similar::similar_events;
use crate::store::EventStore;
use crate::suggest::suggest_best_time;
use crate::timeline::generate_timeline;
use crate::types::{Event, PopularityResult, SlotSuggestion, TimelineEntry};

/// The engine's public entry points over an [`EventStore`].
pub struct SchedulingEngine<S: EventStore> {
    store: S,
    tz: Tz,
}

impl<S: EventStore> SchedulingEngine<S> {
    /// Engine with UTC wall-clock slot generation.
    pub fn new(store: S) -> Self {
        Self::with_timezone(store, Tz::UTC)
    }

    /// Engine generating candidate slots in the given timezone's wall clock.
    pub fn with_timezone(store: S, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// Best free slot for a new event of `duration_hours`, searched over the
    /// next 7–37 days. See [`crate::suggest::suggest_best_time`].
    ///
    /// # Errors
    /// `InvalidInterval` for a non-positive duration; store errors propagate.
    /// A fully booked horizon is NOT an error: the suggestion's `best` is
    /// `None`.
    pub fn suggest_best_time(&self, organizer_id: u64, duration_hours: i64) -> Result<SlotSuggestion> {
        self.suggest_best_time_at(organizer_id, duration_hours, Utc::now())
    }

    /// [`Self::suggest_best_time`] with an explicit clock, for deterministic
    /// callers and tests.
    pub fn suggest_best_time_at(
        &self,
        organizer_id: u64,
        duration_hours: i64,
        now: DateTime<Utc>,
    ) -> Result<SlotSuggestion> {
        let events = self.store.events_by_organizer(organizer_id)?;
        let suggestion = suggest_best_time(&events, duration_hours, now, self.tz)?;
        debug!(
            organizer_id,
            duration_hours,
            existing_events = events.len(),
            found = suggestion.best.is_some(),
            alternatives = suggestion.alternatives.len(),
            "best-time search finished"
        );
        Ok(suggestion)
    }

    /// Would moving event `event_id` to `[new_start, new_end)` collide with
    /// another of its organizer's events? The event's own current slot is
    /// excluded from the check.
    ///
    /// # Errors
    /// `NotFound` when the event id does not resolve; `InvalidInterval` when
    /// `new_end <= new_start`.
    pub fn check_conflict(
        &self,
        event_id: u64,
        new_start: DateTime<Utc>,
        new_end: DateTime<Utc>,
    ) -> Result<bool> {
        let candidate = Interval::new(new_start, new_end)?;
        let event = self
            .store
            .event_by_id(event_id)?
            .ok_or(EngineError::NotFound(event_id))?;
        let events = self.store.events_by_organizer(event.organizer_id)?;
        let conflicting = has_conflict(&events, Some(event_id), &candidate);
        debug!(event_id, conflicting, "conflict check finished");
        Ok(conflicting)
    }

    /// Up to `count` events similar to `event_id`, by shared category tag or
    /// name keyword, most recent start first.
    ///
    /// # Errors
    /// `NotFound` when the source event id does not resolve.
    pub fn similar_events(&self, event_id: u64, count: usize) -> Result<Vec<Event>> {
        let source = self
            .store
            .event_by_id(event_id)?
            .ok_or(EngineError::NotFound(event_id))?;
        let all = self.store.all_events(None)?;
        Ok(similar_events(&source, &all, count))
    }

    /// Top `top_n` events by popularity score.
    pub fn events_by_popularity(&self, top_n: usize) -> Result<Vec<PopularityResult>> {
        self.events_by_popularity_at(top_n, Utc::now())
    }

    /// [`Self::events_by_popularity`] with an explicit clock.
    pub fn events_by_popularity_at(
        &self,
        top_n: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<PopularityResult>> {
        let events = self.store.all_events(None)?;
        Ok(rank_by_popularity(&events, top_n, now))
    }

    /// Reference agenda scaled to `duration_hours`, anchored at
    /// `event_start`. Pure; no store access.
    ///
    /// # Errors
    /// `InvalidInterval` for a non-positive or non-finite duration.
    pub fn suggested_timeline(
        &self,
        event_start: DateTime<Utc>,
        duration_hours: f64,
    ) -> Result<Vec<TimelineEntry>> {
        generate_timeline(event_start, duration_hours)
    }
}
