//! Binary entrypoint for station-uptime.
//!
//! Prints `ERROR` and exits 1 on any failure: bad arguments, unreadable file
//! or malformed input. Details go to the log on stderr.
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use uptime_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("failed to initialise logging: {}", err);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::error!(error = %err.kind(), "invalid arguments");
            return fail();
        }
    };

    let result = run(&cli, &mut std::io::stdout().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "uptime computation failed");
            fail()
        }
    }
}

fn fail() -> ExitCode {
    println!("ERROR");
    ExitCode::FAILURE
}
