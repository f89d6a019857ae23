//! Per-slot intersection of participant availability.

use chrono::NaiveDateTime;

use crate::schedule::Schedule;

/// Iterate the slots at which every name in `participants` is available.
///
/// Slots are yielded in the order they appear in [`Schedule::slots`]. A slot
/// with no availability entry counts as empty, so requesting anyone at all
/// skips it. A name missing from [`Schedule::participants`] never appears in
/// any availability set, so requesting one simply yields nothing — not an
/// error.
///
/// An empty `participants` is vacuously available everywhere and yields
/// every slot; callers that consider that degenerate must guard before
/// calling (the `quorum` binary refuses an empty selection).
///
/// The returned iterator borrows its inputs and holds no hidden cursor —
/// call the function again for a fresh, independent traversal.
pub fn common_slots<'a>(
    schedule: &'a Schedule,
    participants: &'a [String],
) -> impl Iterator<Item = NaiveDateTime> + 'a {
    schedule.slots.iter().copied().filter(move |slot| {
        let available = schedule
            .availability
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or_default();
        participants
            .iter()
            .all(|wanted| available.iter().any(|name| name == wanted))
    })
}
