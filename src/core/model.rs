// LogDigest - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary between parsing, analysis,
// and reporting.

use chrono::NaiveDateTime;

use crate::util::constants;

// =============================================================================
// Log Record (normalised output of parsing)
// =============================================================================

/// A single successfully parsed log line.
///
/// Immutable once created. `level` and `message` are the captured
/// groups verbatim; the timestamp has second resolution and no timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Parsed timestamp (local wall-clock time as written in the file).
    pub timestamp: NaiveDateTime,

    /// Severity token as written, e.g. "ERROR", "WARN", "INFO", "DEBUG".
    pub level: String,

    /// Remainder of the line after the level marker. May be empty.
    pub message: String,
}

// =============================================================================
// Level counts
// =============================================================================

/// Occurrence counts for the fixed set of recognised severity levels.
///
/// Keys are fixed (ERROR, WARN, INFO in that order); values start at zero
/// and only ever increase. Records with any other level are counted
/// nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub error: u64,
    pub warn: u64,
    pub info: u64,
}

impl LevelCounts {
    /// Increment the counter for `level` if it is one of the recognised
    /// levels. Matching is exact and case-sensitive; anything else
    /// (e.g. "DEBUG", "error") is ignored.
    pub fn increment(&mut self, level: &str) {
        match level {
            "ERROR" => self.error += 1,
            "WARN" => self.warn += 1,
            "INFO" => self.info += 1,
            _ => {}
        }
    }

    /// Counts paired with their level names, in the fixed report order.
    pub fn entries(&self) -> [(&'static str, u64); 3] {
        [
            (constants::LEVELS[0], self.error),
            (constants::LEVELS[1], self.warn),
            (constants::LEVELS[2], self.info),
        ]
    }
}

// =============================================================================
// Error frequency table entries
// =============================================================================

/// One ranked entry of the error frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCount {
    /// Distinct error message text (exact, case-sensitive).
    pub message: String,

    /// Number of ERROR records carrying this message.
    pub count: u64,
}

// =============================================================================
// Analysis result
// =============================================================================

/// Aggregated output of one analysis run; the sole handoff object
/// between the analysis stage and the report renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Per-level record counts.
    pub level_counts: LevelCounts,

    /// Seconds between each adjacent pair of ERROR records, in file
    /// order. Length = max(0, error_count - 1). Timestamps are assumed
    /// non-decreasing; an out-of-order file yields negative gaps which
    /// are reported as-is.
    pub error_gaps: Vec<f64>,

    /// Most frequent error messages, count descending, ties broken by
    /// first appearance. Never more than `constants::TOP_ERRORS_CSV`
    /// entries.
    pub top_errors: Vec<MessageCount>,
}

impl AnalysisResult {
    /// Arithmetic mean of the inter-error gaps, or `None` when there
    /// are fewer than two ERROR records.
    pub fn mean_gap(&self) -> Option<f64> {
        if self.error_gaps.is_empty() {
            return None;
        }
        Some(self.error_gaps.iter().sum::<f64>() / self.error_gaps.len() as f64)
    }
}
