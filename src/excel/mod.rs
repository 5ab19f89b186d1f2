//! Excel template import/export
//!
//! - Import: .xlsx → in-memory [`Workbook`](crate::template::Workbook), values, formulas
//!   and formatting (cell styles, merges, column widths, row heights)
//! - Export: in-memory workbook → .xlsx, every sheet and stored cell written back
//!   with the formatting it was read with

mod exporter;
mod importer;
mod styles;

pub use exporter::TemplateExporter;
pub use importer::TemplateImporter;
pub use styles::{
    parse_sheet_layout, read_package_layout, BorderStyle, CellStyle, FontStyle, NumFormat,
    PackageLayout, StyleSheet,
};
