pub mod classifier;
pub mod config;

pub use classifier::{average_daily_hours, classify, consecutive_booked_days};
pub use config::WorkloadThresholds;
