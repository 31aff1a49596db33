//! Uptime Runner: walks every station of a dataset and collects results
use crate::aggregator::{station_breakdown, StationBreakdown};
use crate::data_model::{Dataset, StationUptime};
use std::time::Instant;

pub struct UptimeRunner<'a> {
    dataset: &'a Dataset,
}

impl<'a> UptimeRunner<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// One result per station, ascending `station_id`.
    pub fn run(&self) -> Vec<StationUptime> {
        self.run_detailed()
            .iter()
            .map(StationBreakdown::uptime)
            .collect()
    }

    /// Like [`run`](Self::run) but keeps each station's window and merged
    /// intervals.
    pub fn run_detailed(&self) -> Vec<StationBreakdown> {
        let start = Instant::now();

        let breakdowns: Vec<StationBreakdown> = self
            .dataset
            .stations()
            .map(|(station_id, chargers)| station_breakdown(self.dataset, station_id, chargers))
            .collect();

        tracing::info!(
            stations = breakdowns.len(),
            reports = self.dataset.report_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "uptime computed"
        );

        breakdowns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::ChargerReport;

    fn report(charger_id: i64, start: i64, end: i64, is_up: bool) -> ChargerReport {
        ChargerReport::new(charger_id, start, end, is_up).unwrap()
    }

    #[test]
    fn test_multiple_stations() {
        let dataset = Dataset::builder()
            .station(2, [1002])
            .station(0, [1000])
            .station(1, [1001])
            .report(report(1000, 0, 100, true))
            .report(report(1001, 0, 100, false))
            .report(report(1001, 50, 100, true))
            .report(report(1002, 0, 100, true))
            .report(report(1002, 25, 100, false))
            .build();

        let results = UptimeRunner::new(&dataset).run();
        let pairs: Vec<_> = results.iter().map(|r| (r.station_id, r.uptime_percent)).collect();
        assert_eq!(pairs, vec![(0, 100), (1, 50), (2, 25)]);
    }

    #[test]
    fn test_shared_charger_counts_for_every_station() {
        let dataset = Dataset::builder()
            .station(0, [1])
            .station(1, [1, 2])
            .report(report(1, 0, 40, true))
            .report(report(2, 0, 100, false))
            .build();

        let results = UptimeRunner::new(&dataset).run();
        let pairs: Vec<_> = results.iter().map(|r| (r.station_id, r.uptime_percent)).collect();
        assert_eq!(pairs, vec![(0, 100), (1, 40)]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(UptimeRunner::new(&dataset).run().is_empty());
    }

    #[test]
    fn test_results_stay_in_range() {
        let mut builder = Dataset::builder();
        for station in 0..20 {
            builder.add_station(station, [station, station + 1]);
            builder.add_report(report(station, station * 7, station * 7 + 30, station % 3 != 0));
            builder.add_report(report(station, station * 5, station * 5 + 11, station % 2 == 0));
        }
        let dataset = builder.build();

        for result in UptimeRunner::new(&dataset).run() {
            assert!(result.uptime_percent <= 100, "{:?}", result);
        }
    }

    #[test]
    fn test_detailed_serializes() {
        let dataset = Dataset::builder()
            .station(0, [1])
            .report(report(1, 0, 10, true))
            .build();

        let detailed = UptimeRunner::new(&dataset).run_detailed();
        let json = serde_json::to_value(&detailed).unwrap();
        assert_eq!(json[0]["window"]["start"], 0);
        assert_eq!(json[0]["window"]["end"], 10);
        assert_eq!(json[0]["up_time"], 10);
        assert_eq!(json[0]["uptime_percent"], 100);
    }
}
