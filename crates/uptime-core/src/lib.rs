//! Uptime Core: Reconciler, Aggregator, e Data Model
//!
//! Turns per-charger up/down reports into confirmed-up intervals and derives
//! one uptime percentage per station.
//!
//! # Pipeline Flow
//!
//! ```text
//! Dataset → Reconciler (per charger) → Aggregator (per station) → StationUptime
//!              ↓                            ↓
//!        up intervals               merged intervals / window
//! ```
//!
//! # Example
//!
//! ```
//! use uptime_core::{ChargerReport, Dataset, UptimeRunner};
//!
//! let dataset = Dataset::builder()
//!     .station(0, [1000, 1001])
//!     .report(ChargerReport::new(1000, 0, 50, true).unwrap())
//!     .report(ChargerReport::new(1001, 50, 100, false).unwrap())
//!     .build();
//!
//! let results = UptimeRunner::new(&dataset).run();
//! assert_eq!(results[0].uptime_percent, 50);
//! ```

pub mod aggregator;
pub mod data_model;
pub mod error;
pub mod interval;
pub mod reconciler;
pub mod runner;

pub use aggregator::{station_breakdown, station_uptime, StationBreakdown};
pub use data_model::{ChargerId, ChargerReport, Dataset, DatasetBuilder, StationId, StationUptime, Time};
pub use error::UptimeError;
pub use interval::{merge_intervals, Interval};
pub use reconciler::reconcile;
pub use runner::UptimeRunner;
