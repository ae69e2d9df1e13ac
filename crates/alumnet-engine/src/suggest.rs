//! Best-time-slot search over a multi-week horizon.
//!
//! Enumerates candidate slots (weekdays only, five start hours per day) over
//! a 30-day window beginning 7 days out, drops candidates that collide with
//! the organizer's existing events, scores the survivors by start hour, and
//! returns the best slot plus up to three near-best alternatives.
//!
//! The search is bounded: 30 days × 5 slots/day = 150 candidates worst case,
//! safe to run synchronously.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::conflict::has_conflict;
use crate::error::{EngineError, Result};
use crate::interval::Interval;
use crate::slot_score::score_hour;
use crate::types::{CandidateSlot, Event, SlotSuggestion};

/// The horizon opens this many days after "now".
pub const HORIZON_LEAD_DAYS: i64 = 7;
/// Length of the horizon in calendar days.
pub const HORIZON_SPAN_DAYS: i64 = 30;
/// Candidate start hours per weekday, local wall-clock.
pub const CANDIDATE_START_HOURS: [u32; 5] = [9, 11, 13, 15, 17];

/// Alternatives must score at least this fraction of the best slot's score.
const ALTERNATIVE_SCORE_RATIO: f64 = 0.8;
/// Maximum number of alternatives returned alongside the best slot.
const MAX_ALTERNATIVES: usize = 3;

/// Find the best free slot for a new event of `duration_hours`, given the
/// organizer's existing events.
///
/// Candidate start hours are interpreted as wall-clock times in `tz`; local
/// times that do not exist or are ambiguous (DST gap/fold) are skipped.
///
/// Returns `best: None` only when every candidate in the horizon conflicts.
/// An organizer with zero events always gets a suggestion.
///
/// # Errors
/// Returns `EngineError::InvalidInterval` when `duration_hours < 1`.
pub fn suggest_best_time(
    events: &[Event],
    duration_hours: i64,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<SlotSuggestion> {
    if duration_hours < 1 {
        return Err(EngineError::InvalidInterval(format!(
            "event duration must be at least 1 hour, got {duration_hours}"
        )));
    }

    let slots = free_candidates(events, duration_hours, now, tz)?;

    // Highest score wins; ties go to the earliest start, which is the first
    // encountered since candidates are generated by ascending date then hour.
    let mut best: Option<&CandidateSlot> = None;
    for slot in &slots {
        if best.map_or(true, |b| slot.score > b.score) {
            best = Some(slot);
        }
    }
    let Some(best) = best.cloned() else {
        return Ok(SlotSuggestion {
            best: None,
            alternatives: Vec::new(),
        });
    };

    let threshold = f64::from(best.score) * ALTERNATIVE_SCORE_RATIO;
    let mut alternatives: Vec<CandidateSlot> = slots
        .iter()
        .filter(|s| s.start != best.start)
        .filter(|s| f64::from(s.score) >= threshold)
        .cloned()
        .collect();
    // Stable sort keeps equal-score alternatives in ascending start order.
    alternatives.sort_by(|a, b| b.score.cmp(&a.score));
    alternatives.truncate(MAX_ALTERNATIVES);

    Ok(SlotSuggestion {
        best: Some(best),
        alternatives,
    })
}

/// Enumerate conflict-free candidate slots over the horizon, in ascending
/// date-then-hour order.
fn free_candidates(
    events: &[Event],
    duration_hours: i64,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<Vec<CandidateSlot>> {
    let horizon_first_day = (now + Duration::days(HORIZON_LEAD_DAYS))
        .with_timezone(&tz)
        .date_naive();
    let duration = Duration::hours(duration_hours);

    let mut slots = Vec::new();
    for day_offset in 0..HORIZON_SPAN_DAYS {
        let date = horizon_first_day + Duration::days(day_offset);
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        for &hour in &CANDIDATE_START_HOURS {
            let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            // DST gap or fold: no unique wall-clock instant, skip the slot.
            let Some(local_start) = tz.from_local_datetime(&naive).single() else {
                continue;
            };
            let start = local_start.with_timezone(&Utc);
            let candidate = Interval::new(start, start + duration)?;
            if has_conflict(events, None, &candidate) {
                continue;
            }
            slots.push(CandidateSlot {
                start: candidate.start(),
                end: candidate.end(),
                score: score_hour(hour),
            });
        }
    }
    Ok(slots)
}
