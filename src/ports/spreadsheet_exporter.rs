//! Spreadsheet Exporter Port - Renders product records to a workbook.

use thiserror::Error;

use crate::domain::product::ProductRecord;

/// MIME type of the produced workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Port for rendering product records.
///
/// # Contract
///
/// Implementations must:
/// - Write one header row followed by one row per distinct tariff code
/// - Keep the first record seen for each tariff code
/// - Return the complete file as bytes
pub trait SpreadsheetExporter: Send + Sync {
    fn render(&self, records: &[ProductRecord]) -> Result<Vec<u8>, ExportError>;
}

/// Errors from spreadsheet rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("failed to render spreadsheet: {0}")]
    Render(String),
}
