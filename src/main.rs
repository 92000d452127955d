use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use weatherstats::ingest::{timed, IngestError, IngestionPipeline};

const USAGE: &str = "Pass a data file name as command line input";

/// Summarize air temperature, barometric pressure and wind speed from a
/// whitespace-delimited sensor log (first line is a header).
///
/// Set RUST_LOG=debug for diagnostic output.
#[derive(Debug, Parser)]
#[command(name = "weatherstats", version)]
struct Cli {
    /// Sensor log to summarize
    path: Option<PathBuf>,

    /// Do not print the total run time
    #[arg(long, default_value_t = false)]
    no_timing: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let (succeeded, elapsed) = timed(|| {
        let Some(path) = cli.path.as_deref() else {
            println!("{USAGE}");
            return true;
        };

        match IngestionPipeline::new().run_path(path) {
            Ok(report) => {
                println!("{report}");
                true
            }
            Err(err @ IngestError::SourceUnavailable { .. }) => {
                debug!("{err:?}");
                println!("{err}");
                true
            }
            Err(err) if err.is_parse_error() => {
                eprintln!("error: malformed input: {err}");
                false
            }
            Err(err) => {
                eprintln!("error: {err}");
                false
            }
        }
    });

    if !succeeded {
        return ExitCode::FAILURE;
    }

    if !cli.no_timing {
        println!();
        println!("Total time: {:.2}", elapsed.as_secs_f64());
    }

    ExitCode::SUCCESS
}
