//! Booking-like shapes the UI passes around, narrowed through one tagged
//! union instead of ad hoc field sniffing.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::booking::{dedup_tags, Booking, EntityRef, TagRef};

/// Restart template: everything needed to start a booking again, minus
/// the interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStub {
    pub project: EntityRef,
    pub tags: Vec<TagRef>,
}

impl BookingStub {
    pub fn new(project: EntityRef, tags: Vec<TagRef>) -> Self {
        Self {
            project,
            tags: dedup_tags(tags),
        }
    }

    /// Template taken from an existing booking.
    pub fn of(booking: &Booking) -> Self {
        Self {
            project: booking.project.clone(),
            tags: booking.tags.clone(),
        }
    }
}

/// Wrapper around a booking verified to be open.
///
/// Owned by the caller and passed by handle into whichever surface needs
/// it; the ticking display reads elapsed time through it against a "now"
/// it supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBooking {
    booking: Booking,
}

impl CurrentBooking {
    /// `None` when the booking is already closed.
    pub fn new(booking: Booking) -> Option<Self> {
        booking.is_open().then_some(Self { booking })
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn into_booking(self) -> Booking {
        self.booking
    }

    pub fn elapsed_secs(&self, now: DateTime<FixedOffset>) -> i64 {
        self.booking.duration_secs(now)
    }
}

/// Tagged union of the booking shapes in circulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BookingLike {
    Booking(Booking),
    Stub(BookingStub),
    CurrentWrapper(CurrentBooking),
}

impl BookingLike {
    /// The single narrowing point: a persisted booking when the shape
    /// carries one, `None` for the interval-less stub.
    pub fn as_booking(&self) -> Option<&Booking> {
        match self {
            BookingLike::Booking(booking) => Some(booking),
            BookingLike::CurrentWrapper(current) => Some(current.booking()),
            BookingLike::Stub(_) => None,
        }
    }

    pub fn project(&self) -> &EntityRef {
        match self {
            BookingLike::Booking(booking) => &booking.project,
            BookingLike::Stub(stub) => &stub.project,
            BookingLike::CurrentWrapper(current) => &current.booking().project,
        }
    }

    pub fn tags(&self) -> &[TagRef] {
        match self {
            BookingLike::Booking(booking) => &booking.tags,
            BookingLike::Stub(stub) => &stub.tags,
            BookingLike::CurrentWrapper(current) => &current.booking().tags,
        }
    }
}
