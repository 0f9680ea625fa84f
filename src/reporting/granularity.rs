//! Reporting bucket-size selection.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Time-bucket unit used to aggregate bookings for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

/// Spans up to two weeks stay at day buckets.
const MAX_DAY_SPAN_DAYS: i64 = 14;
/// Up to two months, week buckets.
const MAX_WEEK_SPAN_DAYS: i64 = 60;
/// Up to three years, month buckets; anything longer falls to years.
const MAX_MONTH_SPAN_DAYS: i64 = 1095;
/// At most this many countable days, a per-category bar chart reads
/// better than a continuous stream.
const MAX_BAR_CHART_SPAN_DAYS: i64 = 2;

/// Bucket unit plus the chart-type hint for the reporting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GranularityDecision {
    pub unit: Granularity,
    pub prefer_bar_chart: bool,
}

/// Picks the bucket unit for a `[from, to]` range.
///
/// Only days up to `today` count: future days cannot contain booked hours
/// and never widen the buckets. An entirely future range gets the
/// smallest unit and the bar-chart hint, since there is nothing to
/// stream. The chart hint uses the same day-counting rule as the unit so
/// the two never disagree.
pub fn select_granularity(from: NaiveDate, to: NaiveDate, today: NaiveDate) -> GranularityDecision {
    if from > today {
        return GranularityDecision {
            unit: Granularity::Day,
            prefer_bar_chart: true,
        };
    }

    let effective_to = to.min(today);
    let days = (effective_to - from).num_days().max(0);

    let unit = if days <= MAX_DAY_SPAN_DAYS {
        Granularity::Day
    } else if days <= MAX_WEEK_SPAN_DAYS {
        Granularity::Week
    } else if days <= MAX_MONTH_SPAN_DAYS {
        Granularity::Month
    } else {
        Granularity::Year
    };

    GranularityDecision {
        unit,
        prefer_bar_chart: days <= MAX_BAR_CHART_SPAN_DAYS,
    }
}

/// Stable, locale-independent label for the bucket containing `date`:
/// `DD.MM`, `W <week>`, `MM.YYYY` or `YYYY`.
pub fn bucket_label(unit: Granularity, date: NaiveDate) -> String {
    match unit {
        Granularity::Day => date.format("%d.%m").to_string(),
        Granularity::Week => format!("W {}", date.iso_week().week()),
        Granularity::Month => date.format("%m.%Y").to_string(),
        Granularity::Year => date.format("%Y").to_string(),
    }
}
