//! Closed time intervals and interval merging.
use serde::{Deserialize, Serialize};

use crate::data_model::Time;

/// Span `[start, end]` during which a charger or station is confirmed up.
///
/// `start <= end`; a degenerate `start == end` interval marks a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: Time,
    pub end: Time,
}

impl Interval {
    pub fn new(start: Time, end: Time) -> Self {
        debug_assert!(start <= end, "interval start {} after end {}", start, end);
        Self { start, end }
    }

    /// Length in time units; widened so `Time::MIN..Time::MAX` cannot overflow.
    pub fn len(&self) -> i128 {
        i128::from(self.end) - i128::from(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, instant: Time) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// True when the two spans share more than a boundary point.
    pub fn overlaps(&self, start: Time, end: Time) -> bool {
        !(self.end <= start || self.start >= end)
    }
}

impl From<(Time, Time)> for Interval {
    fn from((start, end): (Time, Time)) -> Self {
        Interval::new(start, end)
    }
}

/// Merge overlapping or touching intervals into a sorted, disjoint set.
///
/// `(a, b)` and `(c, d)` with `a <= c` merge iff `c <= b`, so a gap of zero
/// still joins.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Sum of interval lengths.
pub fn total_length(intervals: &[Interval]) -> i128 {
    intervals.iter().map(Interval::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: Time, end: Time) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_intervals(Vec::new()).is_empty());
    }

    #[test]
    fn test_merge_overlapping_and_unsorted() {
        let merged = merge_intervals(vec![iv(50, 80), iv(0, 10), iv(5, 20), iv(70, 90)]);
        assert_eq!(merged, vec![iv(0, 20), iv(50, 90)]);
    }

    #[test]
    fn test_merge_touching_endpoints() {
        let merged = merge_intervals(vec![iv(0, 50), iv(50, 100)]);
        assert_eq!(merged, vec![iv(0, 100)]);
    }

    #[test]
    fn test_merge_contained_interval_keeps_outer_end() {
        let merged = merge_intervals(vec![iv(0, 100), iv(25, 75)]);
        assert_eq!(merged, vec![iv(0, 100)]);
    }

    #[test]
    fn test_merge_keeps_degenerate_points() {
        let merged = merge_intervals(vec![iv(10, 10), iv(30, 40), iv(40, 40)]);
        assert_eq!(merged, vec![iv(10, 10), iv(30, 40)]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_intervals(vec![iv(3, 9), iv(0, 4), iv(20, 21), iv(12, 15)]);
        let twice = merge_intervals(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_len_does_not_overflow() {
        assert_eq!(iv(Time::MIN, Time::MAX).len(), (1i128 << 64) - 1);
    }

    #[test]
    fn test_contains_is_closed() {
        let interval = iv(10, 20);
        assert!(interval.contains(10));
        assert!(interval.contains(20));
        assert!(!interval.contains(21));
    }

    #[test]
    fn test_overlap_excludes_shared_boundary() {
        let interval = iv(10, 20);
        assert!(!interval.overlaps(20, 30));
        assert!(!interval.overlaps(0, 10));
        assert!(interval.overlaps(19, 30));
        assert!(interval.overlaps(15, 15));
    }

    #[test]
    fn test_total_length() {
        assert_eq!(total_length(&[iv(0, 10), iv(20, 25), iv(30, 30)]), 15);
    }
}
