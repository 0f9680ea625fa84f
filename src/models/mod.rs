pub mod booking;
pub mod commands;
pub mod stats;

pub use booking::{Booking, BookingSet, EntityRef, TagRef};
pub use commands::{
    AdjustBoundaryCommand, BoundaryField, InsertBookingCommand, StartBookingCommand,
    StopBookingCommand,
};
pub use stats::{
    DaySample, PlannedWeek, StatRow, StatSource, WeekSample, WorkloadLevel, WorkloadSignal,
};
