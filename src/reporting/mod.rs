pub mod aggregate;
pub mod granularity;

pub use aggregate::{aggregate, AggregatedSeries, SeriesBucket};
pub use granularity::{bucket_label, select_granularity, Granularity, GranularityDecision};
