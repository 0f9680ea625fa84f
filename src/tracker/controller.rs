//! Start/stop orchestration for the single open booking.
//!
//! At most one booking per `(user, organisation)` may run at a time. The
//! only way a new open booking is created is "stop whatever is open, then
//! start the requested one", and this module computes the commands for
//! exactly that transition. It reads through the data source and never
//! writes; applying the commands is the caller's job.

use chrono::{DateTime, FixedOffset};
use log::info;
use uuid::Uuid;

use crate::data::BookingDataSource;
use crate::error::{EngineError, ValidationError};
use crate::models::booking::{dedup_tags, floor_to_minute, Booking, EntityRef, TagRef};
use crate::models::commands::{StartBookingCommand, StopBookingCommand};
use crate::tracker::current::BookingStub;

/// Request to start tracking: what to book and from when.
#[derive(Debug, Clone, PartialEq)]
pub struct StartRequest {
    pub project: EntityRef,
    pub tags: Vec<TagRef>,
    pub start: DateTime<FixedOffset>,
}

impl StartRequest {
    pub fn new(project: EntityRef, tags: Vec<TagRef>, start: DateTime<FixedOffset>) -> Self {
        Self {
            project,
            tags: dedup_tags(tags),
            start,
        }
    }

    /// Builds a request from a restart template, flooring the instant to
    /// the minute the way the tracking surface enters it.
    pub fn from_stub(stub: &BookingStub, start: DateTime<FixedOffset>) -> Self {
        Self {
            project: stub.project.clone(),
            tags: stub.tags.clone(),
            start: floor_to_minute(start),
        }
    }
}

/// What the data layer must apply to switch the running booking.
///
/// `stop` (when present) closes the previous open booking at exactly the
/// new booking's start, so the two intervals are adjacent by
/// construction. Apply stop before start: a reader observing the commands
/// in that order never sees two open bookings. Callers applying them
/// concurrently forfeit that guarantee — the engine's contract ends at
/// the command boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct StartTransition {
    pub stop: Option<StopBookingCommand>,
    pub start: StartBookingCommand,
}

/// Computes the command sequences that keep the open-booking invariant.
pub struct BookingController<S> {
    source: S,
}

impl<S: BookingDataSource> BookingController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Stop whatever is open, then start the requested booking.
    ///
    /// The previous booking is closed at the new booking's start instant,
    /// never before it. A request starting before the open booking began
    /// would close it with an empty interval and is rejected as a
    /// validation error; no partial command comes back.
    pub fn start(
        &self,
        org: &EntityRef,
        request: &StartRequest,
    ) -> Result<StartTransition, EngineError> {
        let open = self.source.fetch_open_booking(org)?;

        let stop = match open {
            Some(previous) => {
                info!(
                    "switching open booking for {} at {}",
                    org.key, request.start
                );
                Some(close_command(&previous, request.start)?)
            }
            None => None,
        };

        Ok(StartTransition {
            stop,
            start: StartBookingCommand {
                project: request.project.clone(),
                tags: request.tags.clone(),
                start: request.start,
            },
        })
    }

    /// Convenience over [`BookingController::start`] for the repeat-last
    /// action.
    pub fn start_from_stub(
        &self,
        org: &EntityRef,
        stub: &BookingStub,
        start: DateTime<FixedOffset>,
    ) -> Result<StartTransition, EngineError> {
        self.start(org, &StartRequest::from_stub(stub, start))
    }

    /// Close the named open booking at `end`.
    ///
    /// Returns `Ok(None)` when that booking is no longer the open one — a
    /// concurrent action already closed it, and the close is an idempotent
    /// no-op because the data layer's last writer wins. An end at or
    /// before the booking's start is reported, not corrected.
    pub fn stop(
        &self,
        org: &EntityRef,
        booking_id: Uuid,
        end: DateTime<FixedOffset>,
    ) -> Result<Option<StopBookingCommand>, EngineError> {
        let booking = match self.source.fetch_open_booking(org)? {
            Some(booking) if booking.id == Some(booking_id) => booking,
            _ => return Ok(None),
        };

        Ok(Some(close_command(&booking, end)?))
    }
}

fn close_command(
    booking: &Booking,
    end: DateTime<FixedOffset>,
) -> Result<StopBookingCommand, EngineError> {
    let booking_id = booking
        .id
        .ok_or_else(|| EngineError::conflict("open booking has no persisted id"))?;

    if end <= booking.start {
        return Err(ValidationError::EndNotAfterStart {
            start: booking.start,
            end,
        }
        .into());
    }

    Ok(StopBookingCommand { booking_id, end })
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use uuid::Uuid;

    use crate::models::booking::BookingSet;
    use crate::models::stats::{PlannedWeek, StatRow, StatSource};
    use crate::reporting::granularity::Granularity;

    use super::*;

    fn at(hour: u32, min: u32) -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 3, hour, min, 0)
            .unwrap()
    }

    fn org() -> EntityRef {
        EntityRef::new(Uuid::from_u128(10), "acme")
    }

    fn open_booking(id: u128, start: chrono::DateTime<FixedOffset>) -> Booking {
        Booking {
            id: Some(Uuid::from_u128(id)),
            user: EntityRef::new(Uuid::from_u128(11), "ada"),
            organisation: org(),
            project: EntityRef::new(Uuid::from_u128(12), "website"),
            tags: Vec::new(),
            start,
            end: None,
        }
    }

    struct FakeSource {
        open: Option<Booking>,
    }

    impl BookingDataSource for FakeSource {
        fn fetch_open_booking(&self, _org: &EntityRef) -> Result<Option<Booking>> {
            Ok(self.open.clone())
        }

        fn fetch_booking_set(
            &self,
            _org: &EntityRef,
            _from: chrono::DateTime<FixedOffset>,
            _to: chrono::DateTime<FixedOffset>,
        ) -> Result<BookingSet> {
            Ok(BookingSet::default())
        }

        fn fetch_planned_weekly_hours(&self, _org: &EntityRef) -> Result<PlannedWeek> {
            Ok(PlannedWeek::default())
        }

        fn fetch_stat_rows(
            &self,
            _org: &EntityRef,
            _source: StatSource,
            _from: NaiveDate,
            _to: NaiveDate,
            _granularity: Granularity,
        ) -> Result<Vec<StatRow>> {
            Ok(Vec::new())
        }
    }

    fn request(start: chrono::DateTime<FixedOffset>) -> StartRequest {
        StartRequest::new(
            EntityRef::new(Uuid::from_u128(13), "backend"),
            Vec::new(),
            start,
        )
    }

    #[test]
    fn start_without_open_booking_emits_no_stop() {
        let controller = BookingController::new(FakeSource { open: None });
        let transition = controller.start(&org(), &request(at(9, 0))).unwrap();

        assert!(transition.stop.is_none());
        assert_eq!(transition.start.start, at(9, 0));
    }

    #[test]
    fn start_closes_previous_booking_at_new_start() {
        let controller = BookingController::new(FakeSource {
            open: Some(open_booking(1, at(8, 0))),
        });
        let transition = controller.start(&org(), &request(at(9, 30))).unwrap();

        let stop = transition.stop.expect("previous booking must be stopped");
        assert_eq!(stop.booking_id, Uuid::from_u128(1));
        // Adjacent by construction: old end equals new start.
        assert_eq!(stop.end, transition.start.start);
    }

    #[test]
    fn start_before_open_booking_start_is_rejected() {
        let controller = BookingController::new(FakeSource {
            open: Some(open_booking(1, at(9, 0))),
        });
        let result = controller.start(&org(), &request(at(8, 30)));

        assert!(matches!(
            result,
            Err(EngineError::Validation(
                ValidationError::EndNotAfterStart { .. }
            ))
        ));
    }

    #[test]
    fn stop_is_idempotent_when_booking_already_closed() {
        let controller = BookingController::new(FakeSource { open: None });
        let command = controller
            .stop(&org(), Uuid::from_u128(1), at(10, 0))
            .unwrap();
        assert!(command.is_none());

        // A different booking running means ours was closed concurrently.
        let controller = BookingController::new(FakeSource {
            open: Some(open_booking(2, at(9, 0))),
        });
        let command = controller
            .stop(&org(), Uuid::from_u128(1), at(10, 0))
            .unwrap();
        assert!(command.is_none());
    }

    #[test]
    fn stop_rejects_end_at_or_before_start() {
        let controller = BookingController::new(FakeSource {
            open: Some(open_booking(1, at(9, 0))),
        });
        let result = controller.stop(&org(), Uuid::from_u128(1), at(9, 0));

        assert!(matches!(
            result,
            Err(EngineError::Validation(
                ValidationError::EndNotAfterStart { .. }
            ))
        ));
    }

    #[test]
    fn stop_emits_close_command_for_the_open_booking() {
        let controller = BookingController::new(FakeSource {
            open: Some(open_booking(1, at(9, 0))),
        });
        let command = controller
            .stop(&org(), Uuid::from_u128(1), at(17, 30))
            .unwrap()
            .expect("open booking must produce a stop command");

        assert_eq!(command.end, at(17, 30));
    }

    #[test]
    fn start_from_stub_floors_the_instant() {
        let controller = BookingController::new(FakeSource { open: None });
        let stub = BookingStub::new(EntityRef::new(Uuid::from_u128(13), "backend"), Vec::new());
        let ragged = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 3, 9, 12, 47)
            .unwrap();

        let transition = controller.start_from_stub(&org(), &stub, ragged).unwrap();
        assert_eq!(transition.start.start, at(9, 12));
    }
}
