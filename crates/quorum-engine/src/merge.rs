//! Collapsing discrete slot instants into contiguous time ranges.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A maximal contiguous block of slots, with `end > start`.
///
/// `end` is exclusive: a range covering the single 15-minute slot starting
/// at 10:00 runs from 10:00 to 10:15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SlotRange {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Merge discrete slot starts into contiguous ranges.
///
/// Input order does not matter; instants are sorted and deduplicated first.
/// Two slots are contiguous when they are exactly `slot_minutes` apart — no
/// tolerance. Each closed range ends one slot width after its last instant,
/// so an isolated instant becomes a range of exactly one slot.
///
/// When `min_duration_minutes` is positive, ranges shorter than it are
/// dropped after merging. Filtering never happens during the merge, so a
/// short range next to a gap cannot borrow duration from a neighbor.
///
/// The output is sorted ascending, pairwise non-overlapping and
/// non-adjacent.
pub fn merge_slots(
    instants: &[NaiveDateTime],
    slot_minutes: u32,
    min_duration_minutes: u32,
) -> Vec<SlotRange> {
    if instants.is_empty() {
        return Vec::new();
    }

    let mut sorted = instants.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let step = Duration::minutes(i64::from(slot_minutes));

    let mut merged = Vec::new();
    let mut start = sorted[0];
    let mut end = sorted[0];

    for &slot in &sorted[1..] {
        if slot - end == step {
            end = slot;
        } else {
            merged.push(SlotRange {
                start,
                end: end + step,
            });
            start = slot;
            end = slot;
        }
    }
    merged.push(SlotRange {
        start,
        end: end + step,
    });

    if min_duration_minutes > 0 {
        let min = i64::from(min_duration_minutes);
        merged.retain(|range| range.duration_minutes() >= min);
    }

    merged
}
