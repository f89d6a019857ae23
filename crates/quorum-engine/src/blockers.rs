//! Ranking participants by how much common time they block.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::intersect::common_slots;
use crate::schedule::Schedule;

/// How many slots open up when one participant sits out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blocker {
    pub name: String,
    /// Slots available to everyone else that the full selection lacks.
    pub slots_gained: usize,
}

/// Rank participants by the number of slots gained if they alone sit out.
///
/// Removing a required participant can only grow or keep the intersection,
/// so the gain is the size of the set difference against the full-selection
/// baseline. Participants whose removal gains nothing are omitted. The
/// result is sorted descending by gain; ties keep the relative order of
/// `participants`.
///
/// One re-intersection per person — linear in the selection size, unlike
/// the combinatorial [`find_alternatives`](crate::find_alternatives).
pub fn find_blockers(schedule: &Schedule, participants: &[String]) -> Vec<Blocker> {
    let base: HashSet<NaiveDateTime> = common_slots(schedule, participants).collect();

    let mut blockers: Vec<Blocker> = participants
        .iter()
        .filter_map(|person| {
            let remaining: Vec<String> = participants
                .iter()
                .filter(|name| *name != person)
                .cloned()
                .collect();
            let gained = common_slots(schedule, &remaining)
                .filter(|slot| !base.contains(slot))
                .count();

            (gained > 0).then(|| Blocker {
                name: person.clone(),
                slots_gained: gained,
            })
        })
        .collect();

    blockers.sort_by_key(|blocker| std::cmp::Reverse(blocker.slots_gained));
    blockers
}
