//! Report rendering.
//!
//! Two renderings of the same rows are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | ASCII table | [`table`] | Terminal / human review |
//! | JSON object | [`json`]  | Automation / scripting  |
//!
//! Use [`render`] to produce either from the assembled [`ReportRow`]s.

pub mod json;
pub mod table;

use crate::report::ReportRow;

/// Renders report rows as an ASCII table, or as a JSON object when
/// `to_json` is set.
pub fn render(rows: &[ReportRow], to_json: bool) -> String {
    if to_json {
        json::format(rows)
    } else {
        table::format(rows)
    }
}
