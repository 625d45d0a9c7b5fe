// LogDigest - core/analysis.rs
//
// Aggregation over a parsed record sequence: per-level counts,
// inter-error timing, and error message ranking. Pure functions,
// no side effects.

use crate::core::model::{AnalysisResult, LevelCounts, LogRecord, MessageCount};
use crate::util::constants;
use std::collections::HashMap;

/// Aggregate `records` in the order supplied (assumed = file order).
///
/// Records with an unrecognised level are parsed but affect no output.
/// ERROR records (exact, case-sensitive) additionally feed the gap
/// sequence and the frequency table.
pub fn analyze(records: &[LogRecord]) -> AnalysisResult {
    let mut level_counts = LevelCounts::default();
    let mut error_timestamps = Vec::new();
    let mut error_messages: Vec<&str> = Vec::new();

    for record in records {
        level_counts.increment(&record.level);

        if record.level == constants::ERROR_LEVEL {
            error_timestamps.push(record.timestamp);
            error_messages.push(record.message.as_str());
        }
    }

    // Gap between each adjacent ERROR pair, in fractional seconds.
    // Timestamps are assumed non-decreasing; no reordering is performed,
    // so an out-of-order file yields negative gaps as-is.
    let error_gaps: Vec<f64> = error_timestamps
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_milliseconds() as f64 / 1000.0)
        .collect();

    let top_errors = rank_messages(&error_messages, constants::TOP_ERRORS_CSV);

    tracing::debug!(
        errors = level_counts.error,
        warnings = level_counts.warn,
        infos = level_counts.info,
        gaps = error_gaps.len(),
        distinct_errors = top_errors.len(),
        "Aggregation complete"
    );

    AnalysisResult {
        level_counts,
        error_gaps,
        top_errors,
    }
}

/// Count distinct messages and keep the `limit` most frequent.
///
/// Ranking is stable: count descending, ties broken by order of first
/// appearance in `messages`.
fn rank_messages(messages: &[&str], limit: usize) -> Vec<MessageCount> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();

    for (first_seen, &message) in messages.iter().enumerate() {
        let entry = counts.entry(message).or_insert((0, first_seen));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(message, (count, first_seen))| (message, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(message, count, _)| MessageCount {
            message: message.to_string(),
            count,
        })
        .collect()
}
