//! Failure taxonomy for the engine.
//!
//! Validation errors are expected, recoverable conditions the caller can
//! correct; conflicts mean the caller's view of the data is stale and a
//! refresh is needed before retrying. Collaborator failures pass through
//! as their own kind so the UI can distinguish "bad input" from "fetch
//! broke".

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Expected, caller-correctable input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A closed interval would come out empty or inverted.
    #[error("interval is empty: start {start} must be before end {end}")]
    EmptyInterval {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    /// A stop instant at or before the booking's start. Indicates a clock
    /// or input error upstream, reported rather than silently corrected.
    #[error("end {end} must be after start {start}")]
    EndNotAfterStart {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },

    /// A pair edit needs the earlier booking to be closed first.
    #[error("booking is still open, stop it before editing the pair")]
    MissingEnd,

    /// The booking has no persisted id yet, so no command can address it.
    #[error("booking has not been persisted yet")]
    NotPersisted,

    /// Insertion was requested for a pair that overlaps; the overlap has
    /// to be resolved instead.
    #[error("bookings overlap, resolve the overlap instead of inserting")]
    OverlapWhereGapExpected,

    /// A supplied end for an inserted booking runs into the next booking.
    #[error("inserted end {end} runs past the next booking's start {limit}")]
    EndPastNextStart {
        end: DateTime<FixedOffset>,
        limit: DateTime<FixedOffset>,
    },
}

/// Top-level failure kinds surfaced to the UI/data layer.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The data layer observed state that contradicts the command being
    /// built, e.g. a concurrent edit got there first. The UI should
    /// prompt a refresh rather than retry with stale state.
    #[error("booking state conflict: {0}")]
    Conflict(String),

    /// Failure reported by the data-fetching collaborator.
    #[error(transparent)]
    Data(#[from] anyhow::Error),
}

impl EngineError {
    pub fn conflict(message: impl Into<String>) -> Self {
        EngineError::Conflict(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
