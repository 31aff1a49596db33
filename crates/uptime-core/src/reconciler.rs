//! Charger Reconciler: one charger's reports to confirmed-up intervals.
//!
//! Reports are replayed in `(start_time, down before up)` order. Up reports
//! append their span; down reports carve their span out of everything
//! accumulated so far, splitting intervals that straddle it.

use crate::data_model::{ChargerReport, Time};
use crate::interval::Interval;

/// Reconcile a charger's reports into confirmed-up intervals.
///
/// The result is neither sorted nor merged; the aggregator does both.
/// Degenerate `(t, t)` intervals from instantaneous up reports survive unless
/// a later down report covers them.
pub fn reconcile(reports: &[ChargerReport]) -> Vec<Interval> {
    let mut ordered: Vec<&ChargerReport> = reports.iter().collect();
    // Stable sort; `false < true` puts down reports first at equal start.
    ordered.sort_by_key(|r| (r.start_time(), r.is_up()));

    let mut up: Vec<Interval> = Vec::new();
    for report in ordered {
        if report.is_up() {
            up.push(Interval::new(report.start_time(), report.end_time()));
        } else {
            up = subtract(up, report.start_time(), report.end_time());
        }
    }

    tracing::trace!(
        reports = reports.len(),
        intervals = up.len(),
        "charger reconciled"
    );
    up
}

/// Remove `[start, end]` from every interval, keeping the left and right
/// remainders.
fn subtract(intervals: Vec<Interval>, start: Time, end: Time) -> Vec<Interval> {
    let mut kept = Vec::with_capacity(intervals.len() + 1);
    for interval in intervals {
        if !interval.overlaps(start, end) {
            kept.push(interval);
            continue;
        }
        if interval.start < start {
            kept.push(Interval::new(interval.start, start));
        }
        if interval.end > end {
            kept.push(Interval::new(end, interval.end));
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(start: i64, end: i64, is_up: bool) -> ChargerReport {
        ChargerReport::new(1, start, end, is_up).unwrap()
    }

    fn sorted(mut intervals: Vec<Interval>) -> Vec<(i64, i64)> {
        intervals.sort();
        intervals.into_iter().map(|i| (i.start, i.end)).collect()
    }

    #[test]
    fn test_no_reports() {
        assert!(reconcile(&[]).is_empty());
    }

    #[test]
    fn test_up_reports_are_kept_verbatim() {
        let intervals = reconcile(&[report(0, 50, true), report(25, 75, true)]);
        assert_eq!(sorted(intervals), vec![(0, 50), (25, 75)]);
    }

    #[test]
    fn test_down_truncates_tail() {
        let intervals = reconcile(&[report(0, 100, true), report(25, 100, false)]);
        assert_eq!(sorted(intervals), vec![(0, 25)]);
    }

    #[test]
    fn test_down_splits_middle() {
        let intervals = reconcile(&[report(0, 100, true), report(40, 60, false)]);
        assert_eq!(sorted(intervals), vec![(0, 40), (60, 100)]);
    }

    #[test]
    fn test_down_removes_contained_interval() {
        let intervals = reconcile(&[report(10, 20, true), report(0, 30, false)]);
        assert!(intervals.is_empty());
    }

    #[test]
    fn test_down_only_affects_earlier_up_reports() {
        // The up report starting at 50 is replayed after the down report.
        let intervals = reconcile(&[
            report(50, 100, true),
            report(20, 60, false),
            report(0, 40, true),
        ]);
        assert_eq!(sorted(intervals), vec![(0, 20), (50, 100)]);
    }

    #[test]
    fn test_down_before_up_at_equal_start() {
        let intervals = reconcile(&[report(0, 100, true), report(0, 50, false)]);
        assert_eq!(sorted(intervals), vec![(0, 100)]);
    }

    #[test]
    fn test_touching_down_leaves_interval_alone() {
        let intervals = reconcile(&[report(0, 50, true), report(50, 80, false)]);
        assert_eq!(sorted(intervals), vec![(0, 50)]);
    }

    #[test]
    fn test_instant_up_is_preserved() {
        let intervals = reconcile(&[report(100, 100, true)]);
        assert_eq!(sorted(intervals), vec![(100, 100)]);
    }

    #[test]
    fn test_instant_down_splits_without_losing_length() {
        let intervals = reconcile(&[report(0, 10, true), report(5, 5, false)]);
        assert_eq!(sorted(intervals), vec![(0, 5), (5, 10)]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = [
            report(0, 100, true),
            report(20, 30, false),
            report(60, 70, false),
            report(65, 90, true),
        ];
        let mut backward = forward;
        backward.reverse();

        assert_eq!(sorted(reconcile(&forward)), sorted(reconcile(&backward)));
    }
}
