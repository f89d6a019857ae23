//! Tests for the blocker ranking.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use quorum_engine::{find_blockers, Schedule};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn dt(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn schedule(
    participants: &[&str],
    availability: &[(&str, &[&str])],
) -> Schedule {
    Schedule {
        source: "when2meet".to_string(),
        name: "Band practice".to_string(),
        participants: names(participants),
        slot_minutes: 15,
        slots: availability.iter().map(|(slot, _)| dt(slot)).collect(),
        availability: availability
            .iter()
            .map(|(slot, people)| (dt(slot), names(people)))
            .collect::<BTreeMap<_, _>>(),
    }
}

// ── Ranking ─────────────────────────────────────────────────────────────────

#[test]
fn universal_blocker_ranks_alone() {
    // Xan is free nowhere; Ana and Ben share every slot.
    let s = schedule(
        &["Ana", "Ben", "Xan"],
        &[
            ("2026-04-03T19:00:00", &["Ana", "Ben"]),
            ("2026-04-03T19:15:00", &["Ana", "Ben"]),
            ("2026-04-03T19:30:00", &["Ana", "Ben"]),
            ("2026-04-03T19:45:00", &["Ana", "Ben"]),
        ],
    );

    let blockers = find_blockers(&s, &names(&["Ana", "Ben", "Xan"]));

    // Removing Xan gains all four slots; removing anyone else gains zero,
    // so only Xan appears.
    assert_eq!(blockers.len(), 1);
    assert_eq!(blockers[0].name, "Xan");
    assert_eq!(blockers[0].slots_gained, 4);
}

#[test]
fn ranking_is_descending_by_slots_gained() {
    // Base intersection is only 19:00. Removing Ben frees three more
    // slots; removing Ana or Cleo frees one each.
    let s = schedule(
        &["Ana", "Ben", "Cleo"],
        &[
            ("2026-04-03T19:00:00", &["Ana", "Ben", "Cleo"]),
            ("2026-04-03T19:15:00", &["Ben", "Cleo"]),
            ("2026-04-03T19:30:00", &["Ana", "Cleo"]),
            ("2026-04-03T19:45:00", &["Ana", "Cleo"]),
            ("2026-04-03T20:00:00", &["Ana", "Cleo"]),
            ("2026-04-03T20:15:00", &["Ana", "Ben"]),
        ],
    );

    let blockers = find_blockers(&s, &names(&["Ana", "Ben", "Cleo"]));

    let ranked: Vec<(&str, usize)> = blockers
        .iter()
        .map(|b| (b.name.as_str(), b.slots_gained))
        .collect();
    assert_eq!(ranked, vec![("Ben", 3), ("Ana", 1), ("Cleo", 1)]);
}

#[test]
fn ties_keep_selection_order() {
    // Two disjoint pairs of slots: removing either participant gains two.
    let s = schedule(
        &["Ana", "Ben"],
        &[
            ("2026-04-03T19:00:00", &["Ana"]),
            ("2026-04-03T19:15:00", &["Ana"]),
            ("2026-04-03T20:00:00", &["Ben"]),
            ("2026-04-03T20:15:00", &["Ben"]),
        ],
    );

    let blockers = find_blockers(&s, &names(&["Ana", "Ben"]));

    let ranked: Vec<&str> = blockers.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(ranked, vec!["Ana", "Ben"]);

    // Reversing the selection reverses the tie order.
    let blockers = find_blockers(&s, &names(&["Ben", "Ana"]));
    let ranked: Vec<&str> = blockers.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(ranked, vec!["Ben", "Ana"]);
}

// ── Counting ────────────────────────────────────────────────────────────────

#[test]
fn slots_already_common_are_never_counted() {
    // Everyone shares 19:00; removing Ben gains only the 19:15 slot.
    let s = schedule(
        &["Ana", "Ben"],
        &[
            ("2026-04-03T19:00:00", &["Ana", "Ben"]),
            ("2026-04-03T19:15:00", &["Ana"]),
        ],
    );

    let blockers = find_blockers(&s, &names(&["Ana", "Ben"]));

    assert_eq!(blockers.len(), 1);
    assert_eq!(blockers[0].name, "Ben");
    assert_eq!(blockers[0].slots_gained, 1);
}

#[test]
fn nobody_blocking_yields_empty_ranking() {
    let s = schedule(
        &["Ana", "Ben"],
        &[
            ("2026-04-03T19:00:00", &["Ana", "Ben"]),
            ("2026-04-03T19:15:00", &["Ana", "Ben"]),
        ],
    );

    assert!(find_blockers(&s, &names(&["Ana", "Ben"])).is_empty());
}

#[test]
fn unknown_name_in_selection_blocks_everything() {
    // A name the poll does not know behaves like someone free nowhere.
    let s = schedule(
        &["Ana", "Ben"],
        &[
            ("2026-04-03T19:00:00", &["Ana", "Ben"]),
            ("2026-04-03T19:15:00", &["Ana", "Ben"]),
        ],
    );

    let blockers = find_blockers(&s, &names(&["Ana", "Ben", "Zoe"]));

    assert_eq!(blockers.len(), 1);
    assert_eq!(blockers[0].name, "Zoe");
    assert_eq!(blockers[0].slots_gained, 2);
}
