//! The combined analysis entry point.
//!
//! Mirrors how a caller consumes the engine: try the full selection first,
//! and only when nothing works fall back to the blocker ranking plus
//! exclusion alternatives.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alternatives::{find_alternatives, Alternative};
use crate::blockers::{find_blockers, Blocker};
use crate::group::grouped_windows;
use crate::schedule::Schedule;

/// The full analysis for one participant selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Event display name, copied from the schedule.
    pub event: String,
    /// The analyzed selection, in request order.
    pub participants: Vec<String>,
    /// Windows where the whole selection is free. Empty when no window of
    /// the requested length exists.
    pub windows: BTreeMap<String, Vec<String>>,
    /// Populated only when `windows` is empty.
    pub blockers: Vec<Blocker>,
    /// Populated only when `windows` is empty.
    pub alternatives: Vec<Alternative>,
}

/// Analyze a selection: common windows first, fallbacks when there are none.
///
/// When the full selection has at least one window of
/// `min_duration_minutes`, `blockers` and `alternatives` stay empty — there
/// is nothing to repair. Otherwise both fallbacks run, exploring up to
/// `max_missing` exclusions with the same duration threshold.
pub fn analyze(
    schedule: &Schedule,
    participants: &[String],
    min_duration_minutes: u32,
    max_missing: usize,
) -> Analysis {
    let windows = grouped_windows(schedule, participants, min_duration_minutes);

    let (blockers, alternatives) = if windows.is_empty() {
        debug!(
            "no common window for {} participants, exploring fallbacks",
            participants.len()
        );
        (
            find_blockers(schedule, participants),
            find_alternatives(schedule, participants, max_missing, min_duration_minutes),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    Analysis {
        event: schedule.name.clone(),
        participants: participants.to_vec(),
        windows,
        blockers,
        alternatives,
    }
}
