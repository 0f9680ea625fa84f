//! Workload classification over a trailing window of weekly samples.

use chrono::NaiveDate;

use crate::models::stats::{DaySample, WeekSample, WorkloadLevel, WorkloadSignal};
use crate::workload::config::WorkloadThresholds;

/// Classifies the trailing window into a workload signal.
///
/// `weeks` is ordered oldest to newest; only the most recent
/// `thresholds.window_weeks` entries are considered. `days` carries the
/// day-level hours backing the consecutive-day and daily-average
/// metrics. No I/O happens here — both windows arrive pre-bucketed from
/// the data layer.
pub fn classify(
    weeks: &[WeekSample],
    days: &[DaySample],
    reference: NaiveDate,
    thresholds: &WorkloadThresholds,
) -> WorkloadSignal {
    let window_start = weeks.len().saturating_sub(thresholds.window_weeks);
    let window = &weeks[window_start..];

    let (weekly_hours, planned_hours) = window
        .last()
        .map(|week| (week.hours, week.planned_hours))
        .unwrap_or((0.0, 0.0));

    WorkloadSignal {
        level: classify_level(weekly_hours, planned_hours, thresholds),
        weekly_hours,
        planned_hours,
        consecutive_days: consecutive_booked_days(days, reference),
        average_daily_hours: average_daily_hours(days, reference),
    }
}

/// A zero or negative baseline never classifies above healthy: without a
/// plan the ratio is meaningless.
fn classify_level(hours: f64, planned: f64, thresholds: &WorkloadThresholds) -> WorkloadLevel {
    if planned <= 0.0 {
        return WorkloadLevel::Healthy;
    }

    if hours > planned * thresholds.risk_ratio {
        WorkloadLevel::Risk
    } else if hours > planned * thresholds.warning_ratio {
        WorkloadLevel::Warning
    } else {
        WorkloadLevel::Healthy
    }
}

/// Length of the run of booked days ending at the reference date,
/// scanning backward until a day without bookings. Runs elsewhere in the
/// window do not count.
pub fn consecutive_booked_days(days: &[DaySample], reference: NaiveDate) -> u32 {
    let mut run = 0;
    let mut cursor = reference;
    while days
        .iter()
        .any(|day| day.date == cursor && day.hours > 0.0)
    {
        run += 1;
        cursor = cursor.pred_opt().expect("previous day should exist");
    }
    run
}

/// Average hours per booked day over the trailing seven days. Days
/// without bookings do not dilute the average, so sparse part-time
/// schedules read correctly.
pub fn average_daily_hours(days: &[DaySample], reference: NaiveDate) -> f64 {
    let span_start = reference - chrono::Duration::days(6);
    let booked: Vec<f64> = days
        .iter()
        .filter(|day| day.date >= span_start && day.date <= reference && day.hours > 0.0)
        .map(|day| day.hours)
        .collect();

    if booked.is_empty() {
        return 0.0;
    }
    booked.iter().sum::<f64>() / booked.len() as f64
}
