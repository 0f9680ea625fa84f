//! Command objects handed to the data layer.
//!
//! The engine computes these; applying them, and any retry policy, belongs
//! to the caller. Field names serialize camelCase so the data layer can
//! forward them to the API unchanged.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::booking::{EntityRef, TagRef};

/// Opens a new running booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBookingCommand {
    pub project: EntityRef,
    pub tags: Vec<TagRef>,
    pub start: DateTime<FixedOffset>,
}

/// Closes the named open booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopBookingCommand {
    pub booking_id: Uuid,
    pub end: DateTime<FixedOffset>,
}

/// Which boundary of a booking an adjustment moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundaryField {
    Start,
    End,
}

/// Moves one boundary of an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustBoundaryCommand {
    pub booking_id: Uuid,
    pub field: BoundaryField,
    pub value: DateTime<FixedOffset>,
}

/// Creates a booking in the gap between two existing ones. Left open when
/// `end` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBookingCommand {
    pub project: EntityRef,
    pub tags: Vec<TagRef>,
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn commands_serialize_camel_case() {
        let command = StopBookingCommand {
            booking_id: Uuid::from_u128(9),
            end: FixedOffset::east_opt(7200)
                .unwrap()
                .with_ymd_and_hms(2026, 8, 3, 17, 0, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(&command).unwrap();
        assert!(json.get("bookingId").is_some());
        assert!(json.get("end").is_some());
        assert!(json.get("booking_id").is_none());
    }

    #[test]
    fn boundary_field_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&BoundaryField::Start).unwrap(),
            "\"start\""
        );
        assert_eq!(
            serde_json::to_string(&BoundaryField::End).unwrap(),
            "\"end\""
        );
    }
}
