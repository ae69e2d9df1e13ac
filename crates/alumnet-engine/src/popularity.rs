//! Popularity scoring and top-N ranking.
//!
//! `score = participant_count × time_factor`. Events starting more than 30
//! days out get a 1.2× boost so far-future events with momentum surface above
//! equally-attended near-term ones.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Event, PopularityResult};

/// Events further out than this get the future boost.
const FUTURE_BOOST_DAYS: i64 = 30;
const FUTURE_BOOST_FACTOR: f64 = 1.2;

/// Rank events descending by popularity score, truncated to `top_n`.
///
/// The sort is stable: events with equal scores keep the order in which the
/// store returned them, so callers must not rely on any secondary tiebreak.
/// Zero-participant events score 0.0 and sort last.
pub fn rank_by_popularity(
    events: &[Event],
    top_n: usize,
    now: DateTime<Utc>,
) -> Vec<PopularityResult> {
    let mut ranked: Vec<PopularityResult> = events
        .iter()
        .map(|e| {
            let time_factor = if e.start_time - now > Duration::days(FUTURE_BOOST_DAYS) {
                FUTURE_BOOST_FACTOR
            } else {
                1.0
            };
            PopularityResult {
                event_id: e.id,
                name: e.name.clone(),
                participant_count: e.participant_count,
                score: f64::from(e.participant_count) * time_factor,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}
