//! Date grouping and human-readable formatting of merged ranges.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::intersect::common_slots;
use crate::merge::{merge_slots, SlotRange};
use crate::schedule::Schedule;

/// Group ranges under the calendar date of their start.
///
/// A range is never split across buckets, even when it runs past midnight;
/// it stays under the date it begins. Keys iterate in ascending date order.
pub fn group_by_date(ranges: &[SlotRange]) -> BTreeMap<NaiveDate, Vec<SlotRange>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<SlotRange>> = BTreeMap::new();
    for range in ranges {
        grouped.entry(range.start.date()).or_default().push(*range);
    }
    grouped
}

/// Render a range as `"HH:MM ~ HH:MM (1h 30m)"`.
///
/// The duration omits a zero hour or zero minute component. A zero-length
/// range — which the merger cannot produce, since its minimum width is one
/// slot — renders an empty parenthetical.
pub fn format_range(range: &SlotRange) -> String {
    let total = range.duration_minutes();
    let hours = total / 60;
    let minutes = total % 60;

    let duration = match (hours, minutes) {
        (0, 0) => String::new(),
        (h, 0) => format!("{h}h"),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    };

    format!(
        "{} ~ {} ({})",
        range.start.format("%H:%M"),
        range.end.format("%H:%M"),
        duration
    )
}

/// Common availability for `participants`, merged, grouped, and formatted.
///
/// Composes [`common_slots`], [`merge_slots`], [`group_by_date`] and
/// [`format_range`], materializing the intersection before merging. Returns
/// `"YYYY-MM-DD"` → formatted ranges in ascending date order.
///
/// An empty map means no window of at least `min_duration_minutes` exists —
/// that is the signal to fall back to
/// [`find_alternatives`](crate::find_alternatives). The conventional
/// threshold is 60 minutes; only usefully long windows surface by default.
pub fn grouped_windows(
    schedule: &Schedule,
    participants: &[String],
    min_duration_minutes: u32,
) -> BTreeMap<String, Vec<String>> {
    let slots: Vec<_> = common_slots(schedule, participants).collect();
    let merged = merge_slots(&slots, schedule.slot_minutes, min_duration_minutes);

    group_by_date(&merged)
        .into_iter()
        .map(|(date, ranges)| {
            let formatted = ranges.iter().map(format_range).collect();
            (date.format("%Y-%m-%d").to_string(), formatted)
        })
        .collect()
}
