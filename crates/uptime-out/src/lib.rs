//! UPTIME-OUT: Station Results to Text or JSON
//!
//! The text format is the canonical one, one `<station_id> <uptime_percent>`
//! line per station in ascending id order. JSON is available for tooling, with
//! an optional detailed shape that includes each station's window and merged
//! up intervals.
//!
//! # Example
//!
//! ```
//! use uptime_core::StationUptime;
//!
//! let rows = [
//!     StationUptime { station_id: 0, uptime_percent: 100 },
//!     StationUptime { station_id: 1, uptime_percent: 0 },
//! ];
//! assert_eq!(uptime_out::render_text(&rows), "0 100\n1 0\n");
//! ```

pub mod renderer;

pub use renderer::{render_json, render_json_detailed, render_text, DetailedRow};

use thiserror::Error;
use uptime_core::StationBreakdown;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render computed station breakdowns in the requested format.
///
/// `detailed` only affects JSON; text output is always the canonical
/// two-column form.
pub fn render(breakdowns: &[StationBreakdown], format: Format, detailed: bool) -> Result<String, RenderError> {
    match format {
        Format::Text => {
            let rows: Vec<_> = breakdowns.iter().map(StationBreakdown::uptime).collect();
            Ok(render_text(&rows))
        }
        Format::Json if detailed => render_json_detailed(breakdowns),
        Format::Json => {
            let rows: Vec<_> = breakdowns.iter().map(StationBreakdown::uptime).collect();
            render_json(&rows)
        }
    }
}
