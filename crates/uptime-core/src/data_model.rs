//! Data Model: ChargerReport, Dataset, StationUptime
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::UptimeError;

pub type StationId = i64;
pub type ChargerId = i64;
/// Opaque point in time; no clock or timezone semantics.
pub type Time = i64;

/// One availability observation for a charger over `[start_time, end_time]`.
///
/// Only constructible through [`ChargerReport::new`], which checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChargerReport {
    charger_id: ChargerId,
    start_time: Time,
    end_time: Time,
    is_up: bool,
}

impl ChargerReport {
    /// Build a report, rejecting `start_time > end_time`.
    /// Zero-length reports are an instantaneous observation and are accepted.
    pub fn new(
        charger_id: ChargerId,
        start_time: Time,
        end_time: Time,
        is_up: bool,
    ) -> Result<Self, UptimeError> {
        if start_time > end_time {
            return Err(UptimeError::InvalidTimeRange {
                charger_id,
                start_time,
                end_time,
            });
        }
        Ok(Self {
            charger_id,
            start_time,
            end_time,
            is_up,
        })
    }

    pub fn charger_id(&self) -> ChargerId {
        self.charger_id
    }

    pub fn start_time(&self) -> Time {
        self.start_time
    }

    pub fn end_time(&self) -> Time {
        self.end_time
    }

    pub fn is_up(&self) -> bool {
        self.is_up
    }

    pub fn is_instant(&self) -> bool {
        self.start_time == self.end_time
    }
}

/// Station membership plus every charger's reports.
///
/// Built once through [`DatasetBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    stations: BTreeMap<StationId, BTreeSet<ChargerId>>,
    reports: HashMap<ChargerId, Vec<ChargerReport>>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &BTreeSet<ChargerId>)> {
        self.stations.iter().map(|(id, chargers)| (*id, chargers))
    }

    pub fn station_chargers(&self, station_id: StationId) -> Option<&BTreeSet<ChargerId>> {
        self.stations.get(&station_id)
    }

    /// Reports for a charger in input order; empty when it never reported.
    pub fn reports_for(&self, charger_id: ChargerId) -> &[ChargerReport] {
        self.reports
            .get(&charger_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn report_count(&self) -> usize {
        self.reports.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DatasetBuilder {
    stations: BTreeMap<StationId, BTreeSet<ChargerId>>,
    reports: HashMap<ChargerId, Vec<ChargerReport>>,
}

impl DatasetBuilder {
    /// Declare a station. A repeated id replaces the earlier declaration.
    pub fn station(mut self, station_id: StationId, chargers: impl IntoIterator<Item = ChargerId>) -> Self {
        self.add_station(station_id, chargers);
        self
    }

    pub fn report(mut self, report: ChargerReport) -> Self {
        self.add_report(report);
        self
    }

    pub fn add_station(&mut self, station_id: StationId, chargers: impl IntoIterator<Item = ChargerId>) {
        self.stations.insert(station_id, chargers.into_iter().collect());
    }

    pub fn add_report(&mut self, report: ChargerReport) {
        self.reports.entry(report.charger_id).or_default().push(report);
    }

    pub fn build(self) -> Dataset {
        Dataset {
            stations: self.stations,
            reports: self.reports,
        }
    }
}

/// Result row: one station and its floored uptime percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationUptime {
    pub station_id: StationId,
    /// Always within `0..=100`.
    pub uptime_percent: u8,
}
