//! XLSX exporter for product records, backed by `rust_xlsxwriter`.

use std::collections::HashSet;

use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

use crate::domain::product::ProductRecord;
use crate::ports::{ExportError, SpreadsheetExporter};

/// Column headers, in order.
pub const HEADERS: [&str; 9] = [
    "Nombre del Producto",
    "Código HS",
    "Origen del País",
    "Impuestos IGI (Tasa Máxima)",
    "Impuestos IGI (Reducciones aplicables)",
    "IVA (%)",
    "DTA (%)",
    "NOMs",
    "COFEPRIS",
];

const SHEET_NAME: &str = "Sheet1";

/// Renders records as a single-sheet workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the table rows: one per distinct normalized tariff code,
    /// first occurrence wins.
    pub fn rows(records: &[ProductRecord]) -> Vec<[String; 9]> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter_map(|record| {
                let hs_code = record.normalized_hs_code();
                if !seen.insert(hs_code.clone()) {
                    return None;
                }
                Some([
                    record.product_name.clone(),
                    hs_code,
                    record.origin_country.clone(),
                    record.igi_max.clone(),
                    record.igi_reductions.clone(),
                    record.iva.clone(),
                    record.dta.clone(),
                    record.noms_text(),
                    record.cofepris.as_str().to_string(),
                ])
            })
            .collect()
    }

    /// Column widths: longest cell text (header included) plus two.
    pub fn column_widths(rows: &[[String; 9]]) -> [usize; 9] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths.map(|w| w + 2)
    }

    fn build(records: &[ProductRecord]) -> Result<Vec<u8>, XlsxError> {
        let rows = Self::rows(records);
        let widths = Self::column_widths(&rows);

        let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
        let cell_format = Format::new().set_border(FormatBorder::Thin);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let row_index = (i + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string_with_format(row_index, col as u16, cell, &cell_format)?;
            }
        }

        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width as f64)?;
        }

        workbook.save_to_buffer()
    }
}

impl SpreadsheetExporter for XlsxExporter {
    fn render(&self, records: &[ProductRecord]) -> Result<Vec<u8>, ExportError> {
        Self::build(records).map_err(|e| ExportError::Render(e.to_string()))
    }
}
