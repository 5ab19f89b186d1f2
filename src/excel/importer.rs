//! Excel importer implementation - Excel (.xlsx) → in-memory templates

use super::styles::{read_package_layout, PackageLayout};
use crate::error::{FillError, FillResult};
use crate::template::{Sheet, Template, Workbook};
use crate::types::CellValue;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads every worksheet of an .xlsx template into memory
pub struct TemplateImporter {
    path: PathBuf,
}

impl TemplateImporter {
    /// Create a new template importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the workbook. Sheet order is preserved; the first sheet is the
    /// one that gets filled.
    pub fn import(&self) -> FillResult<Workbook> {
        if !self.path.exists() {
            return Err(FillError::TemplateNotFound(self.path.clone()));
        }

        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| FillError::Excel(format!("Failed to open Excel file: {}", e)))?;

        // Values still fill when the formatting cannot be read
        let mut package = read_package_layout(&self.path).unwrap_or_else(|e| {
            warn!(error = %e, "template formatting unreadable; output keeps values only");
            PackageLayout::default()
        });

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                FillError::Excel(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            // Formula text is optional; a sheet without formulas reads as values only
            let formulas = workbook.worksheet_formula(&sheet_name).ok();

            let mut sheet = Self::read_sheet(&sheet_name, &range, formulas.as_ref());
            if let Some(layout) = package.sheets.remove(&sheet_name) {
                sheet.set_layout(layout);
            }
            debug!(
                sheet = %sheet_name,
                rows = sheet.max_row(),
                columns = sheet.max_column(),
                merged = sheet.layout().merged.len(),
                "imported worksheet"
            );
            sheets.push(sheet);
        }

        debug!(styles = package.styles.len(), "imported cell formats");
        Ok(Workbook::with_styles(sheets, package.styles))
    }

    fn read_sheet(name: &str, range: &Range<Data>, formulas: Option<&Range<String>>) -> Template {
        let mut sheet = Template::new(name);

        if let Some((row0, col0)) = range.start() {
            for (row, col, cell) in range.used_cells() {
                let value = Self::convert_cell(cell);
                sheet.set_cell(row0 + row as u32 + 1, col0 + col as u32 + 1, value);
            }
        }
        if let Some((row_end, col_end)) = range.end() {
            sheet.ensure_bounds(row_end + 1, col_end + 1);
        }

        // Formula text replaces the cached value so it survives the write-back
        if let Some(formulas) = formulas {
            if let Some((row0, col0)) = formulas.start() {
                for (row, col, formula) in formulas.used_cells() {
                    let text = if formula.starts_with('=') {
                        formula.clone()
                    } else {
                        format!("={}", formula)
                    };
                    sheet.set_cell(
                        row0 + row as u32 + 1,
                        col0 + col as u32 + 1,
                        CellValue::Formula(text),
                    );
                }
            }
        }

        sheet
    }

    /// Convert a calamine cell into a template cell
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            // The serial keeps its date look through the cell's number format
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}
