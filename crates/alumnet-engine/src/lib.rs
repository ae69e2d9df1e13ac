//! # alumnet-engine
//!
//! Event scheduling and recommendation engine for the AlumNet alumni network.
//!
//! The engine is the one algorithmic corner of an otherwise CRUD-shaped
//! platform: it detects time-overlap conflicts between an organizer's events,
//! searches a multi-week horizon for the best free slot for a new event, ranks
//! events by popularity, scales a reference agenda template to an arbitrary
//! duration, and finds similar events by category or keyword.
//!
//! All operations are pure computations over events read through the
//! [`store::EventStore`] trait; the engine owns no mutable state.
//!
//! ## Modules
//!
//! - [`interval`] — half-open `[start, end)` time ranges and overlap tests
//! - [`conflict`] — conflict detection against an organizer's events
//! - [`slot_score`] — hour-desirability lookup for candidate slots
//! - [`suggest`] — best-time-slot search over the scheduling horizon
//! - [`popularity`] — popularity scoring and top-N ranking
//! - [`timeline`] — proportional agenda template scaling
//! - [`similar`] — similar-event lookup
//! - [`store`] — read-only event store contract
//! - [`engine`] — stateless facade wiring the store to the pure modules
//! - [`error`] — error types

pub mod conflict;
pub mod engine;
pub mod error;
pub mod interval;
pub mod popularity;
pub mod similar;
pub mod slot_score;
pub mod store;
pub mod suggest;
pub mod timeline;
pub mod types;

pub use conflict::has_conflict;
pub use engine::SchedulingEngine;
pub use error::EngineError;
pub use interval::Interval;
pub use popularity::rank_by_popularity;
pub use similar::similar_events;
pub use slot_score::score_hour;
pub use store::{EventStore, MemoryStore};
pub use suggest::suggest_best_time;
pub use timeline::generate_timeline;
pub use types::{CandidateSlot, Event, PopularityResult, SlotSuggestion, TimelineEntry};
