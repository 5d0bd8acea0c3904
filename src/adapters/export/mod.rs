//! Spreadsheet export adapters.

mod xlsx_exporter;

pub use xlsx_exporter::{XlsxExporter, HEADERS};
