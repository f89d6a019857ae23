//! Error types for schedule loading and validation.
//!
//! The analysis functions are total over a validated [`Schedule`]: a name the
//! poll does not know simply never matches, and an empty result is a result,
//! not an error. Everything that can actually fail happens at the boundary,
//! when a schedule is parsed and checked.
//!
//! [`Schedule`]: crate::schedule::Schedule

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The input was not valid schedule JSON.
    #[error("schedule parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two participants share a display name. Names are the identifiers at
    /// this layer, so a collision would make every result unreliable.
    #[error("duplicate participant name: {0}")]
    DuplicateParticipant(String),

    /// An availability entry names someone the poll does not know.
    #[error("availability at {slot} names unknown participant {name:?}")]
    UnknownParticipant { slot: NaiveDateTime, name: String },

    /// Slot width must be positive.
    #[error("slot granularity must be positive")]
    ZeroGranularity,
}

/// Convenience alias used throughout quorum-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
