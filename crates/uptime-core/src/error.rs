//! Unified Error Model
use thiserror::Error;

use crate::data_model::{ChargerId, Time};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UptimeError {
    #[error("RANGE/charger {charger_id}: start {start_time} is after end {end_time}")]
    InvalidTimeRange {
        charger_id: ChargerId,
        start_time: Time,
        end_time: Time,
    },
}
