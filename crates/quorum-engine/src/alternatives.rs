//! Degraded-subset exploration: who could sit out to make a time work.

use std::collections::BTreeMap;

use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::group::grouped_windows;
use crate::schedule::Schedule;

/// One viable fallback: the windows that open up when `excluded` sit out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// Who sits out, in the selection's original relative order.
    pub excluded: Vec<String>,
    /// Display label, e.g. `"Alice, Bob excluded"`. Unique per combination.
    pub label: String,
    /// Grouped windows for the remaining participants. Never empty —
    /// combinations that open nothing are omitted entirely.
    pub windows: BTreeMap<String, Vec<String>>,
}

/// Explore dropping up to `max_missing` participants from the selection.
///
/// Every combination of `1..=max_missing` exclusions is tried — combinations,
/// not permutations, and never the whole selection — in combination order
/// over the original participant order. Each remaining subset runs through
/// [`grouped_windows`](crate::grouped_windows) with the same duration
/// threshold; only combinations that open at least one window appear in the
/// result, in enumeration order (all single exclusions first, then pairs,
/// and so on).
///
/// Cost is combinatorial in `max_missing`. Callers wanting bounded latency
/// keep it small; the usual value is 1.
pub fn find_alternatives(
    schedule: &Schedule,
    participants: &[String],
    max_missing: usize,
    min_duration_minutes: u32,
) -> Vec<Alternative> {
    let mut alternatives = Vec::new();
    if participants.is_empty() {
        return alternatives;
    }

    let limit = max_missing.min(participants.len() - 1);

    for missing in 1..=limit {
        for combo in (0..participants.len()).combinations(missing) {
            let remaining: Vec<String> = participants
                .iter()
                .enumerate()
                .filter(|(i, _)| !combo.contains(i))
                .map(|(_, name)| name.clone())
                .collect();

            let windows = grouped_windows(schedule, &remaining, min_duration_minutes);
            if windows.is_empty() {
                continue;
            }

            let excluded: Vec<String> = combo.iter().map(|&i| participants[i].clone()).collect();
            trace!("viable alternative without {:?}", excluded);

            alternatives.push(Alternative {
                label: format!("{} excluded", excluded.join(", ")),
                excluded,
                windows,
            });
        }
    }

    alternatives
}
