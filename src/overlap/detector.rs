//! Overlap detection over sort-adjacent booking pairs.

use crate::models::booking::{Booking, BookingSet};

/// How two sort-adjacent bookings relate in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRelation {
    /// The earlier booking's end (absent counts as still running) lies
    /// strictly after the later booking's start.
    Overlap {
        /// Overlapping seconds; `None` while the earlier booking is open.
        secs: Option<i64>,
    },
    /// The earlier booking ends before the later one starts.
    Gap { secs: i64 },
    /// The earlier booking ends exactly where the later one starts.
    Adjacent,
}

impl PairRelation {
    /// Classifies a pair taken from adjacent positions in a sorted set.
    pub fn classify(earlier: &Booking, later: &Booking) -> Self {
        match earlier.end {
            None => PairRelation::Overlap { secs: None },
            Some(end) if end > later.start => PairRelation::Overlap {
                secs: Some((end - later.start).num_seconds()),
            },
            Some(end) if end < later.start => PairRelation::Gap {
                secs: (later.start - end).num_seconds(),
            },
            Some(_) => PairRelation::Adjacent,
        }
    }

    pub fn is_overlap(&self) -> bool {
        matches!(self, PairRelation::Overlap { .. })
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, PairRelation::Gap { .. })
    }
}

/// For each booking in the set, the index of the immediate successor it
/// overlaps with, aligned with `set.bookings()`.
///
/// Each booking is compared only to its immediate successor in sort
/// order, a single linear scan. A booking can therefore reference at most
/// one overlap even where triple overlaps exist in the data, and a
/// non-adjacent overlap is not reported here — that shape is a data-entry
/// anomaly outside this detector's contract and surfaces once the set is
/// re-sorted.
pub fn overlaps_with_next(set: &BookingSet) -> Vec<Option<usize>> {
    let mut marks = vec![None; set.len()];
    for (index, (earlier, later)) in set.adjacent_pairs().enumerate() {
        if PairRelation::classify(earlier, later).is_overlap() {
            marks[index] = Some(index + 1);
        }
    }
    marks
}

/// Index pairs of the overlapping adjacent bookings in the set.
pub fn overlapping_pairs(set: &BookingSet) -> Vec<(usize, usize)> {
    overlaps_with_next(set)
        .into_iter()
        .enumerate()
        .filter_map(|(earlier, later)| later.map(|later| (earlier, later)))
        .collect()
}
