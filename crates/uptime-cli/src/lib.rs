//! Station uptime CLI: argument handling, logging setup and the batch run.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use uptime_core::UptimeRunner;

/// Environment variable holding the log filter; falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "STATION_UPTIME_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "station-uptime",
    version,
    about = "Compute per-station uptime from charger availability reports"
)]
pub struct Cli {
    /// Input file with [Stations] and [Charger Availability Reports] sections
    pub input: PathBuf,

    #[arg(long, value_enum, env = "STATION_UPTIME_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include windows and merged intervals (json only)
    #[arg(long, default_value_t = false)]
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for uptime_out::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => uptime_out::Format::Text,
            OutputFormat::Json => uptime_out::Format::Json,
        }
    }
}

/// Log to stderr so stdout carries only results.
pub fn init_tracing() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    Ok(())
}

/// Parse the input, compute every station and render the report.
pub fn compute(cli: &Cli) -> Result<String> {
    let dataset = uptime_in::parse_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let breakdowns = UptimeRunner::new(&dataset).run_detailed();
    let output = uptime_out::render(&breakdowns, cli.format.into(), cli.detailed)
        .context("failed to render results")?;
    Ok(output)
}

/// Compute and write the full report to `out`; nothing is written on failure.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let output = compute(cli)?;
    out.write_all(output.as_bytes()).context("failed to write results")?;
    out.flush().context("failed to write results")?;
    Ok(())
}
