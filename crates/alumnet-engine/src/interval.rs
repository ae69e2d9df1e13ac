//! Half-open `[start, end)` time ranges and overlap tests.
//!
//! All conflict logic in the engine reduces to the open-interval overlap test
//! here: touching endpoints are NOT a conflict, so an event ending at 11:00
//! and one starting at 11:00 do not overlap.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, Result};

/// A validated `[start, end)` time range with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting `end <= start`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInterval` when the range is empty or
    /// inverted.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(EngineError::InvalidInterval(format!(
                "end {end} is not after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// This excludes the adjacent case where one ends exactly when the
    /// other starts.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.overlaps_range(other.start, other.end)
    }

    /// Overlap test against a raw `[start, end)` pair, same semantics as
    /// [`Interval::overlaps`]. Used where the other range comes from a stored
    /// event whose `end > start` invariant the store already guarantees.
    pub fn overlaps_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }

    /// True iff `start <= t < end`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}
