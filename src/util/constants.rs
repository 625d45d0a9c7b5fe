// LogDigest - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogDigest";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing
// =============================================================================

/// chrono format string for the fixed log timestamp layout.
/// 24-hour clock, no fractional seconds, no timezone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Recognised severity levels, in the fixed order they are counted
/// and reported. Matching is exact and case-sensitive.
pub const LEVELS: [&str; 3] = ["ERROR", "WARN", "INFO"];

/// The level whose records feed inter-error timing and ranking.
pub const ERROR_LEVEL: &str = "ERROR";

// =============================================================================
// Reporting
// =============================================================================

/// Maximum number of ranked error messages kept in the frequency table
/// and written to the CSV report.
pub const TOP_ERRORS_CSV: usize = 5;

/// Maximum number of ranked error messages shown in the console summary.
pub const TOP_ERRORS_CONSOLE: usize = 3;

/// Suffix appended to the input file stem to form the report filename.
pub const REPORT_SUFFIX: &str = "_analysis.csv";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
