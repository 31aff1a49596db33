//! Station Aggregator: merge member chargers' up intervals and derive the
//! station's uptime percentage.
//!
//! | Condition | Result |
//! |---|---|
//! | no member charger has any report | 0 |
//! | window is a single instant, some charger up at it | 100 |
//! | window is a single instant, nobody up at it | 0 |
//! | window has positive length | floor(100 × merged up length / window length) |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::data_model::{ChargerId, Dataset, StationId, StationUptime, Time};
use crate::interval::{merge_intervals, total_length, Interval};
use crate::reconciler::reconcile;

/// Everything the aggregator derived for one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationBreakdown {
    pub station_id: StationId,
    /// Earliest start to latest end over the raw reports of member chargers.
    /// `None` when none of them reported.
    pub window: Option<Interval>,
    /// Merged, sorted, disjoint station-up intervals.
    pub intervals: Vec<Interval>,
    /// Total length of `intervals`.
    pub up_time: u64,
    pub uptime_percent: u8,
}

impl StationBreakdown {
    pub fn uptime(&self) -> StationUptime {
        StationUptime {
            station_id: self.station_id,
            uptime_percent: self.uptime_percent,
        }
    }
}

/// Compute a station's uptime percentage.
pub fn station_uptime(dataset: &Dataset, station_id: StationId, chargers: &BTreeSet<ChargerId>) -> StationUptime {
    station_breakdown(dataset, station_id, chargers).uptime()
}

/// Compute a station's uptime along with its window and merged intervals.
pub fn station_breakdown(
    dataset: &Dataset,
    station_id: StationId,
    chargers: &BTreeSet<ChargerId>,
) -> StationBreakdown {
    let mut window: Option<(Time, Time)> = None;
    let mut up: Vec<Interval> = Vec::new();

    for &charger_id in chargers {
        let reports = dataset.reports_for(charger_id);
        if reports.is_empty() {
            continue;
        }
        for report in reports {
            window = Some(match window {
                None => (report.start_time(), report.end_time()),
                Some((lo, hi)) => (lo.min(report.start_time()), hi.max(report.end_time())),
            });
        }
        up.extend(reconcile(reports));
    }

    let Some((min_time, max_time)) = window else {
        tracing::debug!(station_id, chargers = chargers.len(), "station has no reports");
        return StationBreakdown {
            station_id,
            window: None,
            intervals: Vec::new(),
            up_time: 0,
            uptime_percent: 0,
        };
    };

    let window = Interval::new(min_time, max_time);
    let intervals = merge_intervals(up);
    let up_length = total_length(&intervals);
    let uptime_percent = if window.is_empty() {
        // Zero-length window: test the instant instead of dividing by zero.
        if intervals.iter().any(|i| i.contains(min_time)) {
            100
        } else {
            0
        }
    } else {
        floor_percent(up_length, window.len())
    };

    tracing::debug!(
        station_id,
        chargers = chargers.len(),
        window_start = min_time,
        window_end = max_time,
        up_length = %up_length,
        uptime_percent,
        "station aggregated"
    );

    StationBreakdown {
        station_id,
        window: Some(window),
        // Merged intervals lie inside the window, so their total fits in u64.
        up_time: up_length as u64,
        intervals,
        uptime_percent,
    }
}

/// `floor(100 * part / whole)` in exact integer arithmetic, clamped to 100.
fn floor_percent(part: i128, whole: i128) -> u8 {
    debug_assert!(whole > 0);
    let percent = (part.max(0) * 100) / whole;
    percent.min(100) as u8
}
