//! Proportional agenda template scaling.
//!
//! A fixed five-phase reference agenda spans 4.5 hours; `generate_timeline`
//! stretches or compresses it to an arbitrary event duration. The template is
//! a business rule kept as a literal table, like the hour-score lookup.

use chrono::{DateTime, Duration, Utc};

use crate::error::{EngineError, Result};
use crate::types::TimelineEntry;

/// Total span of the reference template, in hours.
pub const TEMPLATE_SPAN_HOURS: f64 = 4.5;

struct TemplatePhase {
    name: &'static str,
    start_hours: f64,
    end_hours: f64,
    description: &'static str,
}

const AGENDA_TEMPLATE: [TemplatePhase; 5] = [
    TemplatePhase {
        name: "Opening Ceremony",
        start_hours: 0.0,
        end_hours: 1.0,
        description: "Welcome speech and introductions",
    },
    TemplatePhase {
        name: "Keynote Session",
        start_hours: 1.0,
        end_hours: 2.0,
        description: "Main presentation by keynote speaker",
    },
    TemplatePhase {
        name: "Break",
        start_hours: 2.0,
        end_hours: 2.5,
        description: "Networking and refreshments",
    },
    TemplatePhase {
        name: "Workshop Session",
        start_hours: 2.5,
        end_hours: 4.0,
        description: "Interactive workshop activities",
    },
    TemplatePhase {
        name: "Closing Remarks",
        start_hours: 4.0,
        end_hours: 4.5,
        description: "Final thoughts and thank-yous",
    },
];

/// Scale the reference agenda to `event_duration_hours`, anchored at
/// `event_start`.
///
/// Phase offsets scale by `event_duration_hours / 4.5` using the fractional
/// template hours, so output phases stay contiguous and non-overlapping for
/// any duration; at exactly 4.5 hours the output matches the template
/// verbatim.
///
/// # Errors
/// Returns `EngineError::InvalidInterval` when the duration is non-positive
/// or not finite.
pub fn generate_timeline(
    event_start: DateTime<Utc>,
    event_duration_hours: f64,
) -> Result<Vec<TimelineEntry>> {
    if !event_duration_hours.is_finite() || event_duration_hours <= 0.0 {
        return Err(EngineError::InvalidInterval(format!(
            "event duration must be a positive number of hours, got {event_duration_hours}"
        )));
    }

    let scale = event_duration_hours / TEMPLATE_SPAN_HOURS;
    Ok(AGENDA_TEMPLATE
        .iter()
        .map(|phase| TimelineEntry {
            name: phase.name.to_string(),
            start: event_start + scaled_offset(phase.start_hours, scale),
            end: event_start + scaled_offset(phase.end_hours, scale),
            description: phase.description.to_string(),
        })
        .collect())
}

/// Scaled offset from the event start, rounded to whole milliseconds.
/// Shared phase boundaries compute identically on both sides, so rounding
/// cannot introduce gaps or overlaps.
fn scaled_offset(template_hours: f64, scale: f64) -> Duration {
    Duration::milliseconds((template_hours * scale * 3_600_000.0).round() as i64)
}
