pub mod detector;
pub mod resolver;

pub use detector::{overlapping_pairs, overlaps_with_next, PairRelation};
pub use resolver::{extend_to_close_gap, insert_between, pull_later_start, push_earlier_end};
