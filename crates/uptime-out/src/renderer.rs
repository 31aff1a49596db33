//! Renderers for station uptime results.
//!
//! - text: `<station_id> <uptime_percent>` per line
//! - json: array of `{station_id, uptime_percent}`
//! - detailed json: adds window bounds, up time and merged intervals

use serde::Serialize;
use std::fmt::Write as _;
use uptime_core::{StationBreakdown, StationUptime, Time};

use crate::RenderError;

/// JSON row for the detailed report.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedRow {
    pub station_id: i64,
    pub uptime_percent: u8,
    pub window_start: Option<Time>,
    pub window_end: Option<Time>,
    pub up_time: u64,
    pub intervals: Vec<[Time; 2]>,
}

impl From<&StationBreakdown> for DetailedRow {
    fn from(breakdown: &StationBreakdown) -> Self {
        Self {
            station_id: breakdown.station_id,
            uptime_percent: breakdown.uptime_percent,
            window_start: breakdown.window.map(|w| w.start),
            window_end: breakdown.window.map(|w| w.end),
            up_time: breakdown.up_time,
            intervals: breakdown.intervals.iter().map(|i| [i.start, i.end]).collect(),
        }
    }
}

/// Canonical text output. Rows are written in the order given.
pub fn render_text(rows: &[StationUptime]) -> String {
    let mut out = String::with_capacity(rows.len() * 8);
    for row in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {}", row.station_id, row.uptime_percent);
    }
    out
}

pub fn render_json(rows: &[StationUptime]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(rows)? + "\n")
}

pub fn render_json_detailed(breakdowns: &[StationBreakdown]) -> Result<String, RenderError> {
    let rows: Vec<DetailedRow> = breakdowns.iter().map(DetailedRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)? + "\n")
}
