//! # quorum-engine
//!
//! Common-availability analysis for group scheduling polls.
//!
//! The input is a normalized per-slot availability grid — who can make which
//! discrete time slot — as produced by whatever fetches a poll site. From it
//! the engine computes:
//!
//! - exact windows where every selected participant is free,
//! - fallback windows when up to N participants are dropped,
//! - a ranking of who blocks the most common time.
//!
//! All computations are pure, synchronous, and allocate only call-scoped
//! data; the schedule is never mutated.
//!
//! ## Modules
//!
//! - [`schedule`] — the normalized schedule model and boundary validation
//! - [`intersect`] — per-slot intersection of participant availability
//! - [`merge`] — collapsing discrete slots into contiguous ranges
//! - [`group`] — date grouping and human-readable formatting
//! - [`alternatives`] — degraded-subset exploration
//! - [`blockers`] — ranking participants by blocked time
//! - [`report`] — the combined analysis entry point
//! - [`error`] — error types

pub mod alternatives;
pub mod blockers;
pub mod error;
pub mod group;
pub mod intersect;
pub mod merge;
pub mod report;
pub mod schedule;

pub use alternatives::{find_alternatives, Alternative};
pub use blockers::{find_blockers, Blocker};
pub use error::ScheduleError;
pub use group::{format_range, group_by_date, grouped_windows};
pub use intersect::common_slots;
pub use merge::{merge_slots, SlotRange};
pub use report::{analyze, Analysis};
pub use schedule::Schedule;
