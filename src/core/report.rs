// LogDigest - core/report.rs
//
// Report rendering: human-readable console summary and CSV document.
// Core layer: writes to any Write trait object; filename derivation is
// pure. The driver owns the actual files.

use crate::core::model::AnalysisResult;
use crate::util::constants;
use crate::util::error::ReportError;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

/// Write the human-readable summary.
///
/// Always prints the per-level counts. The average-gap and
/// most-common-errors sections (headers included) are omitted entirely
/// when there are no ERROR records to report.
pub fn write_summary<W: Write>(analysis: &AnalysisResult, writer: &mut W) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Log Analysis Summary:")?;
    writeln!(writer, "--------------------")?;

    for (level, count) in analysis.level_counts.entries() {
        writeln!(writer, "{level} count: {count}")?;
    }

    if let Some(mean) = analysis.mean_gap() {
        writeln!(writer)?;
        writeln!(writer, "Average time between errors: {mean:.2} seconds")?;
    }

    if !analysis.top_errors.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Most common errors:")?;
        for (rank, entry) in analysis
            .top_errors
            .iter()
            .take(constants::TOP_ERRORS_CONSOLE)
            .enumerate()
        {
            writeln!(
                writer,
                "  {}. {} ({} occurrences)",
                rank + 1,
                entry.message,
                entry.count
            )?;
        }
    }

    Ok(())
}

/// Write the CSV report document.
///
/// Row blocks in order, separated by one blank row each: level counts,
/// inter-error gaps with their average (omitted entirely when there are
/// no gaps), and the ranked error messages. Returns the number of data
/// rows written, blank separators excluded. Quoting of embedded
/// delimiters is handled by the csv crate.
pub fn write_csv_report<W: Write>(
    analysis: &AnalysisResult,
    writer: W,
    report_path: &Path,
) -> Result<usize, ReportError> {
    // Flexible mode: rows legitimately have one or two fields, and the
    // blank separators are single empty fields.
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    let mut rows = 0;

    let mut write_row = |fields: &[&str]| -> Result<(), ReportError> {
        csv_writer
            .write_record(fields)
            .map_err(|source| ReportError::Csv {
                path: report_path.to_path_buf(),
                source,
            })
    };

    write_row(&["Log Level Counts"])?;
    rows += 1;
    for (level, count) in analysis.level_counts.entries() {
        write_row(&[level, &count.to_string()])?;
        rows += 1;
    }

    write_row(&[""])?; // blank separator row

    if let Some(mean) = analysis.mean_gap() {
        write_row(&["Time Between Errors (seconds)"])?;
        rows += 1;
        for (i, gap) in analysis.error_gaps.iter().enumerate() {
            write_row(&[&format!("Error {} to {}", i + 1, i + 2), &gap.to_string()])?;
            rows += 1;
        }
        write_row(&["Average Time Between Errors", &format!("{mean:.2}")])?;
        rows += 1;
    }

    write_row(&[""])?; // blank separator row

    write_row(&["Most Common Error Messages", "Count"])?;
    rows += 1;
    for entry in &analysis.top_errors {
        write_row(&[&entry.message, &entry.count.to_string()])?;
        rows += 1;
    }

    csv_writer.flush().map_err(|source| ReportError::Io {
        path: report_path.to_path_buf(),
        source,
    })?;

    Ok(rows)
}

/// Derive the report filename from the analysed input path: file stem
/// (directory components and the extension after the last dot stripped)
/// plus the report suffix. The driver writes it into the current
/// working directory.
pub fn report_filename(input: &Path) -> String {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy();
    format!("{stem}{}", constants::REPORT_SUFFIX)
}
