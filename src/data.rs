//! Interface to the data-fetching collaborator.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::models::booking::{Booking, BookingSet, EntityRef};
use crate::models::stats::{PlannedWeek, StatRow, StatSource};
use crate::reporting::granularity::Granularity;

/// Read access to persisted bookings and working-hour configuration.
///
/// Implemented by the web client's data layer. The engine never blocks:
/// an async transport resolves first, then calls in. Network retry and
/// backoff belong to the implementation, not to the engine.
pub trait BookingDataSource {
    /// The currently running booking for the organisation, if any.
    fn fetch_open_booking(&self, org: &EntityRef) -> Result<Option<Booking>>;

    /// All bookings touching the period, sorted for overlap analysis.
    fn fetch_booking_set(
        &self,
        org: &EntityRef,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<BookingSet>;

    /// The per-weekday planned hours configured for the organisation.
    fn fetch_planned_weekly_hours(&self, org: &EntityRef) -> Result<PlannedWeek>;

    /// Aggregated stat rows for the range, one row per category per
    /// bucket of the requested granularity.
    fn fetch_stat_rows(
        &self,
        org: &EntityRef,
        source: StatSource,
        from: NaiveDate,
        to: NaiveDate,
        granularity: Granularity,
    ) -> Result<Vec<StatRow>>;
}
