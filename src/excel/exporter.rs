//! Excel exporter implementation

use super::styles::{CellStyle, NumFormat, StyleSheet};
use crate::error::{FillError, FillResult};
use crate::template::{Template, Workbook};
use crate::types::CellValue;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline, Formula,
    Workbook as XlsxWorkbook, Worksheet,
};
use std::path::Path;
use tracing::{debug, warn};

/// Excel's per-cell text limit, in characters
const MAX_CELL_CHARS: usize = 32_767;

/// Writes in-memory templates back to an .xlsx file
pub struct TemplateExporter<'a> {
    workbook: &'a Workbook,
}

impl<'a> TemplateExporter<'a> {
    /// Create a new template exporter
    pub fn new(workbook: &'a Workbook) -> Self {
        Self { workbook }
    }

    /// Export every sheet, cell by cell, to `output_path`
    pub fn export(&self, output_path: &Path) -> FillResult<()> {
        let mut workbook = XlsxWorkbook::new();
        let formats = Self::build_formats(self.workbook.styles());

        for sheet in self.workbook.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(sheet.name())
                .map_err(|e| FillError::Excel(format!("Failed to set worksheet name: {}", e)))?;
            Self::apply_layout(worksheet, sheet, &formats)?;
            Self::export_sheet(worksheet, sheet, &formats)?;
            debug!(sheet = %sheet.name(), "exported worksheet");
        }

        workbook
            .save(output_path)
            .map_err(|e| FillError::Excel(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    /// One rust_xlsxwriter format per template style id
    fn build_formats(styles: &StyleSheet) -> Vec<Format> {
        styles.entries().iter().map(to_format).collect()
    }

    /// Column widths, row heights, merges and styled blank cells
    fn apply_layout(
        worksheet: &mut Worksheet,
        sheet: &Template,
        formats: &[Format],
    ) -> FillResult<()> {
        let layout = sheet.layout();

        for span in &layout.columns {
            let (first, last) = (column_index(span.first)?, column_index(span.last)?);
            if let Some(width) = span.width {
                worksheet
                    .set_column_range_width(first, last, width)
                    .map_err(|e| {
                        FillError::Excel(format!(
                            "Failed to set width of columns {}-{}: {}",
                            span.first, span.last, e
                        ))
                    })?;
            }
            if span.hidden {
                worksheet.set_column_range_hidden(first, last).map_err(|e| {
                    FillError::Excel(format!(
                        "Failed to hide columns {}-{}: {}",
                        span.first, span.last, e
                    ))
                })?;
            }
        }

        for (&row, row_format) in &layout.rows {
            if let Some(height) = row_format.height {
                worksheet.set_row_height(row - 1, height).map_err(|e| {
                    FillError::Excel(format!("Failed to set height of row {}: {}", row, e))
                })?;
            }
            if row_format.hidden {
                worksheet.set_row_hidden(row - 1).map_err(|e| {
                    FillError::Excel(format!("Failed to hide row {}: {}", row, e))
                })?;
            }
        }

        // Styled cells the fill left empty keep their borders and fills
        for (&(row, col), &style_id) in &layout.cell_styles {
            let Some(format) = formats.get(style_id as usize) else {
                continue;
            };
            worksheet
                .write_blank(row - 1, column_index(col)?, format)
                .map_err(|e| {
                    FillError::Excel(format!("Failed to format cell ({}, {}): {}", row, col, e))
                })?;
        }

        let plain = Format::new();
        for range in layout.merged.iter().filter(|range| !range.is_single_cell()) {
            let format = cell_format(sheet, formats, range.first_row, range.first_col)
                .unwrap_or(&plain);
            let merged = worksheet.merge_range(
                range.first_row - 1,
                column_index(range.first_col)?,
                range.last_row - 1,
                column_index(range.last_col)?,
                "",
                format,
            );
            if let Err(e) = merged {
                warn!(
                    sheet = %sheet.name(),
                    row = range.first_row,
                    col = range.first_col,
                    error = %e,
                    "merged range skipped"
                );
            }
        }

        Ok(())
    }

    fn export_sheet(
        worksheet: &mut Worksheet,
        sheet: &Template,
        formats: &[Format],
    ) -> FillResult<()> {
        let plain = Format::new();

        for (row, col, value) in sheet.cells() {
            // Template cells are 1-indexed, rust_xlsxwriter cells 0-indexed
            let row_idx = row - 1;
            let col_idx = column_index(col)?;
            let format = cell_format(sheet, formats, row, col).unwrap_or(&plain);

            let result = match value {
                CellValue::Empty => continue,
                CellValue::Text(s) => worksheet.write_string_with_format(
                    row_idx,
                    col_idx,
                    fit_cell_text(s, row, col),
                    format,
                ),
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row_idx, col_idx, *n, format)
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean_with_format(row_idx, col_idx, *b, format)
                }
                CellValue::Formula(f) => worksheet.write_formula_with_format(
                    row_idx,
                    col_idx,
                    Formula::new(f.as_str()),
                    format,
                ),
            };
            result.map_err(|e| {
                FillError::Excel(format!("Failed to write cell ({}, {}): {}", row, col, e))
            })?;
        }
        Ok(())
    }
}

fn cell_format<'f>(
    sheet: &Template,
    formats: &'f [Format],
    row: u32,
    col: u32,
) -> Option<&'f Format> {
    sheet
        .layout()
        .style_of(row, col)
        .and_then(|style_id| formats.get(style_id as usize))
}

fn column_index(col: u32) -> FillResult<u16> {
    col.checked_sub(1)
        .and_then(|c| u16::try_from(c).ok())
        .ok_or_else(|| FillError::Excel(format!("Column {} is beyond the Excel column limit", col)))
}

/// Text cut to Excel's cell limit, in characters
fn fit_cell_text(text: &str, row: u32, col: u32) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            warn!(
                row,
                col,
                chars = text.chars().count(),
                limit = MAX_CELL_CHARS,
                "cell text longer than Excel allows; truncated"
            );
            &text[..cut]
        }
        None => text,
    }
}

//==============================================================================
// Style → Format
//==============================================================================

fn to_format(style: &CellStyle) -> Format {
    let mut format = match &style.num_format {
        NumFormat::General => Format::new(),
        NumFormat::Builtin(id) => Format::new().set_num_format_index(*id),
        NumFormat::Custom(code) => Format::new().set_num_format(code.as_str()),
    };

    let font = &style.font;
    if let Some(name) = &font.name {
        format = format.set_font_name(name.as_str());
    }
    if let Some(size) = font.size {
        format = format.set_font_size(size);
    }
    if let Some(rgb) = font.color {
        format = format.set_font_color(Color::RGB(rgb));
    }
    if font.bold {
        format = format.set_bold();
    }
    if font.italic {
        format = format.set_italic();
    }
    if font.strike {
        format = format.set_font_strikethrough();
    }
    if let Some(underline) = font.underline.as_deref().and_then(underline_kind) {
        format = format.set_underline(underline);
    }

    if let Some(rgb) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(rgb));
    }

    let sides: [(&Option<String>, fn(Format, FormatBorder) -> Format); 4] = [
        (&style.border.left, Format::set_border_left),
        (&style.border.right, Format::set_border_right),
        (&style.border.top, Format::set_border_top),
        (&style.border.bottom, Format::set_border_bottom),
    ];
    for (side, set_border) in sides {
        if let Some(border) = side.as_deref().and_then(border_kind) {
            format = set_border(format, border);
        }
    }

    if let Some(align) = style.horizontal.as_deref().and_then(horizontal_align) {
        format = format.set_align(align);
    }
    if let Some(align) = style.vertical.as_deref().and_then(vertical_align) {
        format = format.set_align(align);
    }
    if style.wrap {
        format = format.set_text_wrap();
    }

    format
}

fn border_kind(name: &str) -> Option<FormatBorder> {
    Some(match name {
        "thin" => FormatBorder::Thin,
        "medium" => FormatBorder::Medium,
        "dashed" => FormatBorder::Dashed,
        "dotted" => FormatBorder::Dotted,
        "thick" => FormatBorder::Thick,
        "double" => FormatBorder::Double,
        "hair" => FormatBorder::Hair,
        "mediumDashed" => FormatBorder::MediumDashed,
        "dashDot" => FormatBorder::DashDot,
        "mediumDashDot" => FormatBorder::MediumDashDot,
        "dashDotDot" => FormatBorder::DashDotDot,
        "mediumDashDotDot" => FormatBorder::MediumDashDotDot,
        "slantDashDot" => FormatBorder::SlantDashDot,
        _ => return None,
    })
}

fn underline_kind(name: &str) -> Option<FormatUnderline> {
    Some(match name {
        "single" => FormatUnderline::Single,
        "double" => FormatUnderline::Double,
        "singleAccounting" => FormatUnderline::SingleAccounting,
        "doubleAccounting" => FormatUnderline::DoubleAccounting,
        _ => return None,
    })
}

fn horizontal_align(name: &str) -> Option<FormatAlign> {
    Some(match name {
        "left" => FormatAlign::Left,
        "center" => FormatAlign::Center,
        "right" => FormatAlign::Right,
        "fill" => FormatAlign::Fill,
        "justify" => FormatAlign::Justify,
        "centerContinuous" => FormatAlign::CenterAcross,
        "distributed" => FormatAlign::Distributed,
        _ => return None,
    })
}

fn vertical_align(name: &str) -> Option<FormatAlign> {
    Some(match name {
        "top" => FormatAlign::Top,
        "center" => FormatAlign::VerticalCenter,
        "bottom" => FormatAlign::Bottom,
        "justify" => FormatAlign::VerticalJustify,
        "distributed" => FormatAlign::VerticalDistributed,
        _ => return None,
    })
}
