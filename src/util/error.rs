// LogDigest - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant carries enough
// context to name the file, line, or operation that failed.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogDigest operations.
/// Errors are categorised by the stage that produced them.
#[derive(Debug)]
pub enum LogDigestError {
    /// Log line or timestamp parsing failed.
    Parse(ParseError),

    /// Report rendering or writing failed.
    Report(ReportError),

    /// A JSON document could not be parsed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogDigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Json { path, source } => {
                write!(f, "Failed to parse JSON '{}': {source}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogDigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors related to log line parsing.
///
/// A line that simply does not match the expected layout is NOT an error
/// (the parser returns `None` for it); these variants cover lines that
/// matched the layout but carried an invalid timestamp, and read failures.
#[derive(Debug)]
pub enum ParseError {
    /// A line matched the layout but its timestamp is not a valid
    /// calendar date/time (e.g. month 13). Strict by design: this
    /// aborts the analysis rather than silently dropping the line.
    TimestampParse {
        line_number: u64,
        raw_timestamp: String,
        format: &'static str,
        source: chrono::ParseError,
    },

    /// I/O error while reading log lines.
    Io { line_number: u64, source: io::Error },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimestampParse {
                line_number,
                raw_timestamp,
                format,
                source,
            } => write!(
                f,
                "line {line_number}: cannot parse timestamp '{raw_timestamp}' \
                 with format '{format}': {source}"
            ),
            Self::Io {
                line_number,
                source,
            } => {
                write!(f, "I/O error after line {line_number}: {source}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TimestampParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for LogDigestError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to CSV report rendering.
#[derive(Debug)]
pub enum ReportError {
    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// I/O error writing the report.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { path, source } => {
                write!(f, "CSV write error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Report I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ReportError> for LogDigestError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for LogDigest results.
pub type Result<T> = std::result::Result<T, LogDigestError>;
