// LogDigest - tests/e2e_analysis.rs
//
// End-to-end tests for the analysis pipeline and the jsonfields
// extraction. These tests exercise real files on disk, real chrono
// timestamp parsing, and real CSV writing — no mocks, no stubs.

use logdigest::core::{analysis, json_fields, parser, report};
use logdigest::core::model::{LevelCounts, MessageCount};
use std::fs::{self, File};
use std::io::BufReader;

/// Write `content` into a file under the temp dir and return its path.
fn temp_log(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Log analysis E2E
// =============================================================================

/// The three-line scenario: two ERRORs ten seconds apart and one WARN.
#[test]
fn e2e_three_line_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_log(
        &dir,
        "server.log",
        "2025-07-23 14:30:00 [ERROR] disk full\n\
         2025-07-23 14:30:10 [ERROR] disk full\n\
         2025-07-23 14:30:20 [WARN] low memory\n",
    );

    let records = parser::parse_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    let result = analysis::analyze(&records);

    assert_eq!(
        result.level_counts,
        LevelCounts {
            error: 2,
            warn: 1,
            info: 0,
        }
    );
    assert_eq!(result.error_gaps, vec![10.0]);
    assert_eq!(
        result.top_errors,
        vec![MessageCount {
            message: "disk full".to_string(),
            count: 2,
        }]
    );

    // Console summary carries the two-decimal average.
    let mut buf = Vec::new();
    report::write_summary(&result, &mut buf).unwrap();
    let summary = String::from_utf8(buf).unwrap();
    assert!(summary.contains("Average time between errors: 10.00 seconds"));
    assert!(summary.contains("  1. disk full (2 occurrences)"));
}

/// The CSV report lands under the derived name and is re-readable row
/// by row, including a message with an embedded comma.
#[test]
fn e2e_csv_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = temp_log(
        &dir,
        "app.2025.log",
        "2025-07-23 14:30:00 [ERROR] read failed, retrying\n\
         2025-07-23 14:30:05 [ERROR] read failed, retrying\n",
    );

    let report_name = report::report_filename(&log_path);
    assert_eq!(report_name, "app.2025_analysis.csv");

    let report_path = dir.path().join(&report_name);
    let records = parser::parse_reader(BufReader::new(File::open(&log_path).unwrap())).unwrap();
    let result = analysis::analyze(&records);
    report::write_csv_report(&result, File::create(&report_path).unwrap(), &report_path).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&report_path)
        .unwrap();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();

    assert!(rows.contains(&vec!["Log Level Counts".to_string()]));
    assert!(rows.contains(&vec!["ERROR".to_string(), "2".to_string()]));
    assert!(rows.contains(&vec!["Error 1 to 2".to_string(), "5".to_string()]));
    assert!(rows.contains(&vec![
        "Average Time Between Errors".to_string(),
        "5.00".to_string()
    ]));
    // The comma inside the message survives the round trip as one field.
    assert!(rows.contains(&vec![
        "read failed, retrying".to_string(),
        "2".to_string()
    ]));
}

/// A file with unparseable lines: they are skipped silently and the
/// remaining records aggregate normally.
#[test]
fn e2e_unparseable_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_log(
        &dir,
        "mixed.log",
        "starting up\n\
         2025-07-23 09:00:00 [INFO] service ready\n\
         --- separator ---\n\
         2025-07-23 09:00:01 [DEBUG] verbose detail\n",
    );

    let records = parser::parse_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
    let result = analysis::analyze(&records);

    // DEBUG parses but is not counted anywhere.
    assert_eq!(records.len(), 2);
    assert_eq!(
        result.level_counts,
        LevelCounts {
            error: 0,
            warn: 0,
            info: 1,
        }
    );
    assert!(result.error_gaps.is_empty());
    assert!(result.top_errors.is_empty());
}

/// A matching line with an impossible calendar date aborts the run.
#[test]
fn e2e_invalid_timestamp_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_log(
        &dir,
        "bad.log",
        "2025-07-23 14:30:00 [INFO] fine\n\
         2025-13-01 14:30:00 [ERROR] impossible month\n",
    );

    let result = parser::parse_reader(BufReader::new(File::open(&path).unwrap()));
    assert!(result.is_err(), "expected strict date validation to fail");
}

// =============================================================================
// jsonfields E2E
// =============================================================================

/// The spec scenario: two fields present, error_count absent.
#[test]
fn e2e_jsonfields_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_log(
        &dir,
        "run.json",
        r#"{"customer_id":"c1","environment":"prod"}"#,
    );

    let doc: serde_json::Value =
        serde_json::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();

    assert_eq!(
        json_fields::field_lines(&doc),
        vec![
            "customer_id=c1".to_string(),
            "environment=prod".to_string(),
            "error_count=None".to_string(),
        ]
    );
}

/// Malformed JSON propagates as an error from the serde layer.
#[test]
fn e2e_jsonfields_malformed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_log(&dir, "broken.json", "{not json");

    let result: Result<serde_json::Value, _> =
        serde_json::from_reader(BufReader::new(File::open(&path).unwrap()));
    assert!(result.is_err());
}
