// LogDigest - core/json_fields.rs
//
// Top-level field extraction for the jsonfields utility. Works on a
// generic serde_json document; no schema is assumed beyond the three
// well-known key names.

use serde_json::Value;

/// The fields printed by jsonfields, in their fixed output order.
pub const SUMMARY_FIELDS: [&str; 3] = ["customer_id", "environment", "error_count"];

/// Render one field value for display.
///
/// An absent key and a present JSON null both render as "None"; the
/// distinction is deliberately collapsed. Strings render as their raw
/// text (no quotes); any other JSON value renders as its compact JSON
/// text.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// One `key=value` output line per summary field, in fixed order.
pub fn field_lines(doc: &Value) -> Vec<String> {
    SUMMARY_FIELDS
        .iter()
        .map(|key| format!("{key}={}", render_value(doc.get(key))))
        .collect()
}
