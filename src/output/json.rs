//! JSON formatter.
//!
//! Produces a pretty-printed JSON object with one member per report row, in
//! row order. Row labels are normalized into snake_case keys so consumers
//! never see the display punctuation.

use serde_json::{Map, Value};

use crate::report::ReportRow;

/// Turns a display label into its JSON object key.
///
/// Colons are dropped, spaces become underscores, and the result is
/// lowercased.
///
/// # Examples
///
/// ```
/// use azure_energy_labeler::output::json::normalize_key;
///
/// assert_eq!(normalize_key("Tenant ID:"), "tenant_id");
/// assert_eq!(normalize_key("Number Of High Findings:"), "number_of_high_findings");
/// ```
pub fn normalize_key(label: &str) -> String {
    label.replace(':', "").replace(' ', "_").to_lowercase()
}

/// Formats report rows as a pretty-printed JSON object.
///
/// # Panics
///
/// Panics if the rows cannot be serialized (should not happen with valid data).
pub fn format(rows: &[ReportRow]) -> String {
    let mut object = Map::new();
    for row in rows {
        object.insert(normalize_key(&row.label), row.value.clone());
    }
    serde_json::to_string_pretty(&Value::Object(object)).expect("JSON serialization failed")
}
