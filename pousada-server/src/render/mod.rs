//! Render pipeline
//!
//! Stateless, single-pass transformations of a record set (or one record)
//! into the target byte formats:
//!
//! - [`table`] - HTML `<tr>` fragments for the UI list
//! - [`voucher`] - single-record PDF confirmation document
//! - [`svg`] - multi-record SVG summary
//! - [`xlsx`] - multi-record workbook
//!
//! All targets format fields the same way: canonical `dd/mm/yyyy` dates,
//! localized Sim/Não booleans, `N/A` placeholders for missing optionals.

pub mod svg;
pub mod table;
pub mod voucher;
pub mod xlsx;

/// Placeholder for missing optional values; never blank, never "null".
const NA: &str = "N/A";

/// Localized yes/no used by every target
pub fn sim_nao(value: bool) -> &'static str {
    if value { "Sim" } else { "Não" }
}

/// Optional text with the N/A placeholder
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NA,
    }
}
