use crate::sections::{split_sections, NumberedLine};
use std::path::Path;
use thiserror::Error;
use uptime_core::{ChargerId, ChargerReport, Dataset, DatasetBuilder, UptimeError};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing section {0}")]
    MissingSection(&'static str),
    #[error("[Charger Availability Reports] appears before [Stations]")]
    SectionOrder,
    #[error("line {line}: station line needs a station id and at least one charger id")]
    InvalidStationLine { line: usize },
    #[error("line {line}: report line needs 4 fields, found {found}")]
    InvalidReportLine { line: usize, found: usize },
    #[error("line {line}: `{value}` is not an integer")]
    InvalidInteger { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidTimeRange {
        line: usize,
        #[source]
        source: UptimeError,
    },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// 1-based input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidStationLine { line }
            | Self::InvalidReportLine { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidTimeRange { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Read and parse an input file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_str(&content)
}

/// Parse the two-section text format into a [`Dataset`].
///
/// `is_up` is true only for `true` in any letter case; any other token reads
/// as down.
pub fn parse_str(input: &str) -> Result<Dataset, ParseError> {
    let sections = split_sections(input)?;
    let mut builder = Dataset::builder();

    for line in &sections.stations {
        parse_station_line(line, &mut builder)?;
    }
    for line in &sections.reports {
        builder.add_report(parse_report_line(line)?);
    }

    let dataset = builder.build();
    tracing::debug!(
        stations = dataset.station_count(),
        reports = dataset.report_count(),
        "input parsed"
    );
    Ok(dataset)
}

fn parse_station_line(line: &NumberedLine<'_>, builder: &mut DatasetBuilder) -> Result<(), ParseError> {
    let fields: Vec<&str> = line.text.split_whitespace().collect();
    let Some((station, chargers)) = fields.split_first() else {
        return Err(ParseError::InvalidStationLine { line: line.number });
    };
    if chargers.is_empty() {
        return Err(ParseError::InvalidStationLine { line: line.number });
    }

    let station_id = parse_int(station, line.number)?;
    let chargers = chargers
        .iter()
        .map(|field| parse_int(field, line.number))
        .collect::<Result<Vec<ChargerId>, _>>()?;

    builder.add_station(station_id, chargers);
    Ok(())
}

fn parse_report_line(line: &NumberedLine<'_>) -> Result<ChargerReport, ParseError> {
    let fields: Vec<&str> = line.text.split_whitespace().collect();
    let [charger, start, end, status] = fields.as_slice() else {
        return Err(ParseError::InvalidReportLine {
            line: line.number,
            found: fields.len(),
        });
    };

    let charger_id = parse_int(charger, line.number)?;
    let start_time = parse_int(start, line.number)?;
    let end_time = parse_int(end, line.number)?;
    let is_up = status.eq_ignore_ascii_case("true");

    ChargerReport::new(charger_id, start_time, end_time, is_up).map_err(|source| ParseError::InvalidTimeRange {
        line: line.number,
        source,
    })
}

fn parse_int(field: &str, line: usize) -> Result<i64, ParseError> {
    field.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        value: field.to_string(),
    })
}
