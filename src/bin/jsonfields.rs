// LogDigest - bin/jsonfields.rs
//
// Print selected top-level fields from a JSON document, one
// `key=value` line each.
//
// Exit codes: 0 on success, 1 for usage errors or a malformed
// document, 2 when the path is not a regular file.

use clap::Parser;
use logdigest::core::json_fields;
use logdigest::util::error::{LogDigestError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// jsonfields - print the customer_id, environment, and error_count
/// fields of a JSON document.
#[derive(Parser, Debug)]
#[command(name = "jsonfields", version, about)]
struct Cli {
    /// JSON file to read.
    jsonfile: PathBuf,
}

fn main() -> ExitCode {
    // clap's own exit code for usage errors is 2, which is reserved
    // here for the missing-file case, so render the error ourselves
    // and exit 1. --help/--version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !cli.jsonfile.is_file() {
        eprintln!("File not found: {}", cli.jsonfile.display());
        return ExitCode::from(2);
    }

    match run(&cli.jsonfile) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|source| LogDigestError::Io {
        path: path.to_path_buf(),
        operation: "open",
        source,
    })?;

    let doc: serde_json::Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LogDigestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    for line in json_fields::field_lines(&doc) {
        println!("{line}");
    }

    Ok(())
}
