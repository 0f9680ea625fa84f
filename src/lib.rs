//! Booking-interval engine for the Timeslip time tracker.
//!
//! Everything in this crate is a synchronous, stateless transformation
//! over booking data supplied by the caller's data layer: interval
//! arithmetic, the single-open-booking start/stop transition, overlap
//! detection and repair, reporting granularity and aggregation, and the
//! workload signal. Persistence, rendering and transport live with the
//! caller; the engine returns command objects and derived values and
//! never applies them itself.

pub mod data;
pub mod error;
pub mod models;
pub mod overlap;
pub mod reporting;
pub mod tracker;
pub mod workload;

pub use data::BookingDataSource;
pub use error::{EngineError, ValidationError};
pub use models::booking::{
    dedup_tags, floor_to_minute, format_hours_minutes, Booking, BookingSet, EntityRef, TagRef,
};
pub use models::commands::{
    AdjustBoundaryCommand, BoundaryField, InsertBookingCommand, StartBookingCommand,
    StopBookingCommand,
};
pub use models::stats::{
    DaySample, PlannedWeek, StatRow, StatSource, WeekSample, WorkloadLevel, WorkloadSignal,
};
pub use overlap::detector::{overlapping_pairs, overlaps_with_next, PairRelation};
pub use overlap::resolver::{
    extend_to_close_gap, insert_between, pull_later_start, push_earlier_end,
};
pub use reporting::aggregate::{aggregate, AggregatedSeries, SeriesBucket};
pub use reporting::granularity::{
    bucket_label, select_granularity, Granularity, GranularityDecision,
};
pub use tracker::controller::{BookingController, StartRequest, StartTransition};
pub use tracker::current::{BookingLike, BookingStub, CurrentBooking};
pub use workload::classifier::{average_daily_hours, classify, consecutive_booked_days};
pub use workload::config::WorkloadThresholds;
