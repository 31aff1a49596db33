//! Section splitting for the input format.
//!
//! The file is split at its two marker lines. Markers match after trimming,
//! so trailing `\r` or indentation is tolerated. Anything above `[Stations]`
//! is ignored.

use crate::parser::ParseError;

pub const STATIONS_MARKER: &str = "[Stations]";
pub const REPORTS_MARKER: &str = "[Charger Availability Reports]";

/// A non-blank content line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

#[derive(Debug, Default)]
pub struct Sections<'a> {
    pub stations: Vec<NumberedLine<'a>>,
    pub reports: Vec<NumberedLine<'a>>,
}

pub fn split_sections(input: &str) -> Result<Sections<'_>, ParseError> {
    let lines: Vec<&str> = input.lines().collect();

    let stations_at = find_marker(&lines, STATIONS_MARKER)?;
    let reports_at = find_marker(&lines, REPORTS_MARKER)?;
    if reports_at < stations_at {
        return Err(ParseError::SectionOrder);
    }

    Ok(Sections {
        stations: content_lines(&lines, stations_at + 1, reports_at),
        reports: content_lines(&lines, reports_at + 1, lines.len()),
    })
}

fn find_marker(lines: &[&str], marker: &'static str) -> Result<usize, ParseError> {
    lines
        .iter()
        .position(|line| line.trim() == marker)
        .ok_or(ParseError::MissingSection(marker))
}

fn content_lines<'a>(lines: &[&'a str], from: usize, to: usize) -> Vec<NumberedLine<'a>> {
    lines[from..to]
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(offset, text)| NumberedLine {
            number: from + offset + 1,
            text,
        })
        .collect()
}
