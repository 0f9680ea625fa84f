//! Booking entity and interval derivation.

use chrono::{DateTime, FixedOffset, Timelike};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Identity reference: opaque id plus the display key the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub id: Uuid,
    pub key: String,
}

impl EntityRef {
    pub fn new(id: Uuid, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
        }
    }
}

/// Tag reference attached to a booking. Uniqueness within a booking is by
/// tag id, not key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    pub id: Uuid,
    pub key: String,
}

impl TagRef {
    pub fn new(id: Uuid, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
        }
    }
}

/// A recorded time interval: half-open `[start, end)`, still running when
/// `end` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Assigned by the persistence layer; absent until first saved.
    pub id: Option<Uuid>,
    pub user: EntityRef,
    pub organisation: EntityRef,
    pub project: EntityRef,
    pub tags: Vec<TagRef>,
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl Booking {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Seconds covered by this booking.
    ///
    /// Closed bookings measure `end - start`; open bookings measure
    /// against `reference_now`, which is why the value is derived at read
    /// time and never cached. A reference earlier than `start` clamps to
    /// zero and logs a warning: that is a display-refresh race, not a
    /// data problem.
    pub fn duration_secs(&self, reference_now: DateTime<FixedOffset>) -> i64 {
        let effective_end = self.end.unwrap_or(reference_now);
        let secs = (effective_end - self.start).num_seconds();
        if secs < 0 {
            if self.is_open() {
                warn!(
                    "reference clock {} is earlier than booking start {}, clamping duration to zero",
                    reference_now, self.start
                );
            }
            return 0;
        }
        secs
    }

    /// Rejects empty or inverted closed intervals before they reach the
    /// persistence layer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(end) = self.end {
            if end <= self.start {
                return Err(ValidationError::EmptyInterval {
                    start: self.start,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// Bookings for one period, ordered by `start` ascending with the id as
/// tie-break so equal starts come out deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSet {
    bookings: Vec<Booking>,
}

impl BookingSet {
    pub fn from_vec(mut bookings: Vec<Booking>) -> Self {
        bookings.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Each booking paired with its immediate successor in sort order, the
    /// unit of overlap analysis.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&Booking, &Booking)> {
        self.bookings.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Deduplicates a tag list by tag id, keeping the first occurrence and
/// its position.
pub fn dedup_tags(tags: Vec<TagRef>) -> Vec<TagRef> {
    let mut seen = Vec::with_capacity(tags.len());
    let mut result = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag.id) {
            seen.push(tag.id);
            result.push(tag);
        }
    }
    result
}

/// Floors an instant to the whole minute, the resolution bookings are
/// entered at.
pub fn floor_to_minute(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .expect("zeroing seconds keeps the timestamp valid")
}

/// Renders a duration as `H:MM` for display surfaces.
pub fn format_hours_minutes(secs: i64) -> String {
    let total_minutes = secs.max(0) / 60;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use uuid::Uuid;

    use super::*;

    fn at(hour: u32, min: u32) -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 3, hour, min, 0)
            .unwrap()
    }

    fn booking(
        id: Option<Uuid>,
        start: chrono::DateTime<FixedOffset>,
        end: Option<chrono::DateTime<FixedOffset>>,
    ) -> Booking {
        Booking {
            id,
            user: EntityRef::new(Uuid::new_v4(), "ada"),
            organisation: EntityRef::new(Uuid::new_v4(), "acme"),
            project: EntityRef::new(Uuid::new_v4(), "website"),
            tags: Vec::new(),
            start,
            end,
        }
    }

    #[test]
    fn closed_duration_ignores_reference_clock() {
        let closed = booking(None, at(9, 0), Some(at(10, 30)));
        assert_eq!(closed.duration_secs(at(9, 15)), 5400);
        assert_eq!(closed.duration_secs(at(23, 0)), 5400);
    }

    #[test]
    fn open_duration_runs_against_reference_clock() {
        let open = booking(None, at(9, 0), None);
        assert_eq!(open.duration_secs(at(9, 45)), 2700);
    }

    #[test]
    fn open_duration_clamps_on_clock_skew() {
        let _ = env_logger::builder().is_test(true).try_init();

        let open = booking(None, at(9, 0), None);
        assert_eq!(open.duration_secs(at(8, 59)), 0);
    }

    #[test]
    fn validate_rejects_empty_interval() {
        let zero = booking(None, at(9, 0), Some(at(9, 0)));
        assert!(matches!(
            zero.validate(),
            Err(ValidationError::EmptyInterval { .. })
        ));

        let inverted = booking(None, at(9, 0), Some(at(8, 0)));
        assert!(inverted.validate().is_err());
        assert!(booking(None, at(9, 0), Some(at(9, 1))).validate().is_ok());
    }

    #[test]
    fn set_orders_by_start_then_id() {
        let id_low = Uuid::from_u128(1);
        let id_high = Uuid::from_u128(2);
        let set = BookingSet::from_vec(vec![
            booking(Some(id_high), at(9, 0), Some(at(10, 0))),
            booking(Some(id_low), at(9, 0), Some(at(9, 30))),
            booking(None, at(8, 0), Some(at(9, 0))),
        ]);

        let starts: Vec<_> = set.bookings().iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![at(8, 0), at(9, 0), at(9, 0)]);
        assert_eq!(set.bookings()[1].id, Some(id_low));
        assert_eq!(set.bookings()[2].id, Some(id_high));
    }

    #[test]
    fn dedup_tags_keeps_first_occurrence() {
        let id = Uuid::from_u128(7);
        let tags = dedup_tags(vec![
            TagRef::new(id, "billable"),
            TagRef::new(Uuid::from_u128(8), "remote"),
            TagRef::new(id, "billable-dup"),
        ]);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key, "billable");
        assert_eq!(tags[1].key, "remote");
    }

    #[test]
    fn floors_to_the_minute() {
        let ragged = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 3, 9, 12, 47)
            .unwrap();
        assert_eq!(floor_to_minute(ragged), at(9, 12));
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_hours_minutes(0), "0:00");
        assert_eq!(format_hours_minutes(5400), "1:30");
        assert_eq!(format_hours_minutes(36 * 3600 + 5 * 60), "36:05");
        assert_eq!(format_hours_minutes(-10), "0:00");
    }
}
