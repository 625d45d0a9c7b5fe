// LogDigest - main.rs
//
// Log analyser entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. The parse -> aggregate -> report pipeline
//
// Exit codes: 0 on success, 2 when the input file does not exist,
// 1 for any other failure.

use clap::Parser;
use logdigest::core::{analysis, parser, report};
use logdigest::util;
use logdigest::util::error::{LogDigestError, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// LogDigest - command-line log file analyser.
///
/// Parses `YYYY-MM-DD HH:MM:SS [LEVEL] message` lines, prints a summary
/// of level counts, inter-error timing, and the most frequent error
/// messages, and writes a CSV report into the current directory.
#[derive(Parser, Debug)]
#[command(name = "logdigest", version, about)]
struct Cli {
    /// Log file to analyse.
    logfile: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    match run(&cli.logfile) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LogDigestError::Io { path, source, .. })
            if source.kind() == ErrorKind::NotFound =>
        {
            // The one recoverable failure mode: report it cleanly and
            // write no report. Distinct exit code for scriptability.
            eprintln!("Error: File {} not found.", path.display());
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The full pipeline for one invocation: read and parse the log file,
/// aggregate, print the console summary, then write the CSV report
/// into the current working directory.
fn run(logfile: &Path) -> Result<()> {
    tracing::info!(file = %logfile.display(), "Analysis starting");

    let records = {
        let file = File::open(logfile).map_err(|source| LogDigestError::Io {
            path: logfile.to_path_buf(),
            operation: "open",
            source,
        })?;
        parser::parse_reader(BufReader::new(file))?
    };

    let analysis = analysis::analyze(&records);

    // Console summary first, mirroring the report on disk. A failed
    // stdout write (e.g. closed pipe) is not worth aborting the run for.
    if let Err(e) = report::write_summary(&analysis, &mut io::stdout()) {
        tracing::warn!(error = %e, "Failed to write console summary");
    }

    let report_name = report::report_filename(logfile);
    let report_path = PathBuf::from(&report_name);

    let out = File::create(&report_path).map_err(|source| LogDigestError::Io {
        path: report_path.clone(),
        operation: "create",
        source,
    })?;
    let rows = report::write_csv_report(&analysis, BufWriter::new(out), &report_path)?;

    tracing::debug!(report = %report_name, rows, "Report written");
    println!("Analysis report generated: {report_name}");

    Ok(())
}
