//! UPTIME-IN: Availability Report Text to Dataset
//!
//! This crate reads the two-section input format and produces the immutable
//! [`Dataset`] consumed by `uptime-core`.
//!
//! ```text
//! [Stations]
//! 0 1001 1002
//! 1 1003
//!
//! [Charger Availability Reports]
//! 1001 0 50000 true
//! 1002 50000 100000 true
//! 1003 25000 75000 false
//! ```
//!
//! # Example
//!
//! ```
//! let dataset = uptime_in::parse_str("[Stations]\n0 1000\n[Charger Availability Reports]\n1000 0 100 true\n").unwrap();
//! assert_eq!(dataset.station_count(), 1);
//! assert_eq!(dataset.reports_for(1000).len(), 1);
//! ```

pub mod parser;
pub mod sections;

pub use parser::{parse_file, parse_str, ParseError};
pub use sections::{REPORTS_MARKER, STATIONS_MARKER};
pub use uptime_core::Dataset;
