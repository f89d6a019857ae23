//! The normalized schedule model shared by all analysis functions.
//!
//! A `Schedule` is produced outside this crate by whatever fetches and parses
//! a poll site. Each source reconciles its own wire format — per-slot lists
//! of person IDs, per-person availability bitstrings, timestamp slots or
//! date-times generated from a (dates × hours) rule — into the single grid
//! below, with participant IDs already resolved to display names. The engine
//! treats the result as immutable input for the duration of one analysis.
//!
//! All instants are naive local date-times in whatever clock the poll was
//! entered in; no timezone conversion happens anywhere in this crate.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A normalized group-scheduling poll: who is available at which slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Identifier of the originating poll platform (informational only).
    pub source: String,
    /// Event display name (informational only).
    pub name: String,
    /// Every participant name known to the poll. Names are the identifiers:
    /// opaque, case-sensitive, unique within one schedule.
    pub participants: Vec<String>,
    /// Width of one discrete time slot, in minutes.
    pub slot_minutes: u32,
    /// Ascending starts of the slots the poll covers. Gaps are allowed and
    /// meaningful — a poll may only cover certain days or hours.
    pub slots: Vec<NaiveDateTime>,
    /// Slot start → names available at that slot. A slot missing from this
    /// map, or mapped to an empty list, has no one available.
    pub availability: BTreeMap<NaiveDateTime, Vec<String>>,
}

impl Schedule {
    /// Parse a schedule from its JSON form and validate it.
    pub fn from_json(json: &str) -> Result<Schedule> {
        let schedule: Schedule = serde_json::from_str(json)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check the boundary invariants the analysis functions rely on.
    ///
    /// Rejects a zero slot width, duplicate participant names, and
    /// availability entries naming someone the poll does not know. Unsorted
    /// `slots` and availability keys missing from `slots` are tolerated:
    /// the merger sorts its input and the intersector only walks declared
    /// slots.
    pub fn validate(&self) -> Result<()> {
        if self.slot_minutes == 0 {
            return Err(ScheduleError::ZeroGranularity);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(self.participants.len());
        for name in &self.participants {
            if !seen.insert(name.as_str()) {
                return Err(ScheduleError::DuplicateParticipant(name.clone()));
            }
        }

        for (slot, names) in &self.availability {
            if let Some(unknown) = names.iter().find(|name| !seen.contains(name.as_str())) {
                return Err(ScheduleError::UnknownParticipant {
                    slot: *slot,
                    name: unknown.clone(),
                });
            }
        }

        Ok(())
    }
}
