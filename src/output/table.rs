//! ASCII table formatter.

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;
use serde_json::Value;

use crate::report::ReportRow;

/// Title spanning the header row of every report table.
pub const REPORT_TITLE: &str = "Energy label report";

/// Formats report rows as a two-column ASCII table titled
/// "[`Energy label report`](REPORT_TITLE)".
pub fn format(rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_header(vec![REPORT_TITLE]);
    for row in rows {
        table.add_row(vec![row.label.clone(), cell_text(&row.value)]);
    }
    table.to_string()
}

fn cell_text(value: &Value) -> String {
    match value {
        // Strings render bare; Value's Display would quote them.
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
