//! Boundary edits that repair gaps and overlaps between adjacent bookings.
//!
//! Every operation computes a command and validates any closed interval it
//! would produce; nothing here mutates the bookings themselves, and no
//! partial command is emitted on a validation failure.

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::booking::Booking;
use crate::models::commands::{AdjustBoundaryCommand, BoundaryField, InsertBookingCommand};
use crate::overlap::detector::PairRelation;
use crate::tracker::current::BookingStub;

/// Moves the earlier booking's end forward to the later booking's start,
/// closing the gap between them.
pub fn extend_to_close_gap(
    earlier: &Booking,
    later: &Booking,
) -> Result<AdjustBoundaryCommand, ValidationError> {
    adjust_end(earlier, later.start)
}

/// Moves the later booking's start back to the earlier booking's end,
/// resolving the overlap while leaving the earlier booking untouched.
pub fn pull_later_start(
    earlier: &Booking,
    later: &Booking,
) -> Result<AdjustBoundaryCommand, ValidationError> {
    let earlier_end = closed_end(earlier)?;
    let booking_id = persisted_id(later)?;

    if let Some(later_end) = later.end {
        if earlier_end >= later_end {
            return Err(ValidationError::EmptyInterval {
                start: earlier_end,
                end: later_end,
            });
        }
    }

    Ok(AdjustBoundaryCommand {
        booking_id,
        field: BoundaryField::Start,
        value: earlier_end,
    })
}

/// Moves the earlier booking's end back to the later booking's start,
/// resolving the overlap while leaving the later booking untouched. The
/// symmetric counterpart of [`pull_later_start`].
pub fn push_earlier_end(
    earlier: &Booking,
    later: &Booking,
) -> Result<AdjustBoundaryCommand, ValidationError> {
    adjust_end(earlier, later.start)
}

/// Opens a new booking in the gap between two adjacent bookings: it
/// starts at the earlier booking's end and, when the caller supplies an
/// end, closes by the later booking's start.
///
/// An overlapping pair never routes here — that is one of the overlap
/// operations' job — and is rejected outright.
pub fn insert_between(
    earlier: &Booking,
    later: &Booking,
    stub: &BookingStub,
    end: Option<DateTime<FixedOffset>>,
) -> Result<InsertBookingCommand, ValidationError> {
    let earlier_end = closed_end(earlier)?;

    if PairRelation::classify(earlier, later).is_overlap() {
        return Err(ValidationError::OverlapWhereGapExpected);
    }

    if let Some(end) = end {
        if end <= earlier_end {
            return Err(ValidationError::EmptyInterval {
                start: earlier_end,
                end,
            });
        }
        if end > later.start {
            return Err(ValidationError::EndPastNextStart {
                end,
                limit: later.start,
            });
        }
    }

    Ok(InsertBookingCommand {
        project: stub.project.clone(),
        tags: stub.tags.clone(),
        start: earlier_end,
        end,
    })
}

fn adjust_end(
    booking: &Booking,
    value: DateTime<FixedOffset>,
) -> Result<AdjustBoundaryCommand, ValidationError> {
    let booking_id = persisted_id(booking)?;

    if value <= booking.start {
        return Err(ValidationError::EmptyInterval {
            start: booking.start,
            end: value,
        });
    }

    Ok(AdjustBoundaryCommand {
        booking_id,
        field: BoundaryField::End,
        value,
    })
}

fn closed_end(booking: &Booking) -> Result<DateTime<FixedOffset>, ValidationError> {
    booking.end.ok_or(ValidationError::MissingEnd)
}

fn persisted_id(booking: &Booking) -> Result<Uuid, ValidationError> {
    booking.id.ok_or(ValidationError::NotPersisted)
}
