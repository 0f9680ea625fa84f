//! Reporting rows and derived workload shapes.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which category dimension a statistics query groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatSource {
    Projects,
    Tags,
    Users,
}

/// One aggregation row from the statistics API: a category key, the
/// numeric components of its time bucket, and booked hours. Which
/// components are set depends on the requested granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub category: String,
    pub year: i32,
    pub month: Option<u32>,
    pub week: Option<u32>,
    pub day: Option<u32>,
    pub hours: f64,
}

/// One calendar week's actual hours against plan. Computed on demand from
/// the rolling window, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSample {
    pub week_label: String,
    pub hours: f64,
    pub planned_hours: f64,
}

/// Day-level booked hours backing the day-resolution workload metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySample {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Three-level load classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkloadLevel {
    Healthy,
    Warning,
    Risk,
}

/// Derived workload signal. Recomputed whenever the underlying window
/// changes; carries no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSignal {
    pub level: WorkloadLevel,
    pub weekly_hours: f64,
    pub planned_hours: f64,
    pub consecutive_days: u32,
    pub average_daily_hours: f64,
}

/// Planned working hours per weekday, as configured per organisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedWeek {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl PlannedWeek {
    pub fn weekly_total(&self) -> f64 {
        self.monday
            + self.tuesday
            + self.wednesday
            + self.thursday
            + self.friday
            + self.saturday
            + self.sunday
    }

    pub fn hours_for(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::PlannedWeek;

    fn full_time() -> PlannedWeek {
        PlannedWeek {
            monday: 8.0,
            tuesday: 8.0,
            wednesday: 8.0,
            thursday: 8.0,
            friday: 8.0,
            saturday: 0.0,
            sunday: 0.0,
        }
    }

    #[test]
    fn weekly_total_sums_all_days() {
        assert_eq!(full_time().weekly_total(), 40.0);
        assert_eq!(PlannedWeek::default().weekly_total(), 0.0);
    }

    #[test]
    fn weekday_lookup_matches_fields() {
        let week = full_time();
        assert_eq!(week.hours_for(Weekday::Wed), 8.0);
        assert_eq!(week.hours_for(Weekday::Sun), 0.0);
    }
}
