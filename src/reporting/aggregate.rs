//! Re-buckets flat stat rows into a chartable, label-keyed series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::stats::StatRow;
use crate::reporting::granularity::Granularity;

/// One time bucket: its display label and hours per category. Every
/// category seen in the input appears in every bucket, zero-filled, so
/// chart axes stay consistent across the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBucket {
    pub label: String,
    pub values: BTreeMap<String, f64>,
}

/// Chronologically ordered buckets plus the category keys that carry a
/// nonzero value somewhere in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSeries {
    pub buckets: Vec<SeriesBucket>,
    pub keys: Vec<String>,
}

/// Folds stat rows into one entry per time bucket.
///
/// Bucket order follows the chronology of the bucket itself, not the
/// insertion order of the source rows. Hours are rounded to two decimals
/// here, at aggregation time, so repeated aggregation of the same input
/// is bit-for-bit reproducible.
pub fn aggregate(rows: &[StatRow], unit: Granularity) -> AggregatedSeries {
    let mut sums: BTreeMap<(i32, u32, u32), BTreeMap<&str, f64>> = BTreeMap::new();
    let mut labels: BTreeMap<(i32, u32, u32), String> = BTreeMap::new();

    // Categories in chronological first-appearance order.
    let mut ordered: Vec<&StatRow> = rows.iter().collect();
    ordered.sort_by_key(|row| bucket_sort_key(row, unit));

    let mut categories: Vec<String> = Vec::new();
    for row in &ordered {
        let key = bucket_sort_key(row, unit);
        labels
            .entry(key)
            .or_insert_with(|| bucket_label_for(row, unit));
        *sums
            .entry(key)
            .or_default()
            .entry(row.category.as_str())
            .or_insert(0.0) += row.hours;
        if !categories.contains(&row.category) {
            categories.push(row.category.clone());
        }
    }

    let mut buckets = Vec::with_capacity(sums.len());
    for (key, summed) in &sums {
        let mut values = BTreeMap::new();
        for category in &categories {
            let hours = summed.get(category.as_str()).copied().unwrap_or(0.0);
            values.insert(category.clone(), round_hours(hours));
        }
        buckets.push(SeriesBucket {
            label: labels[key].clone(),
            values,
        });
    }

    // Categories that never book an hour drop out of the key list; their
    // zero entries stay in the buckets.
    let keys = categories
        .into_iter()
        .filter(|category| buckets.iter().any(|bucket| bucket.values[category] != 0.0))
        .collect();

    AggregatedSeries { buckets, keys }
}

fn bucket_sort_key(row: &StatRow, unit: Granularity) -> (i32, u32, u32) {
    match unit {
        Granularity::Day => (row.year, row.month.unwrap_or(0), row.day.unwrap_or(0)),
        Granularity::Week => (row.year, row.week.unwrap_or(0), 0),
        Granularity::Month => (row.year, row.month.unwrap_or(0), 0),
        Granularity::Year => (row.year, 0, 0),
    }
}

fn bucket_label_for(row: &StatRow, unit: Granularity) -> String {
    match unit {
        Granularity::Day => format!(
            "{:02}.{:02}",
            row.day.unwrap_or(0),
            row.month.unwrap_or(0)
        ),
        Granularity::Week => format!("W {}", row.week.unwrap_or(0)),
        Granularity::Month => format!("{:02}.{}", row.month.unwrap_or(0), row.year),
        Granularity::Year => row.year.to_string(),
    }
}

fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
