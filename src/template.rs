//! In-memory template grids
//!
//! Rows and columns are 1-indexed, as they appear to someone reading the
//! spreadsheet. Cells outside the stored area read as [`CellValue::Empty`].
//! Presentation (cell styles, merges, widths, heights) rides along in a
//! [`SheetLayout`] that the fillers never touch.

use crate::excel::StyleSheet;
use crate::types::CellValue;
use std::collections::BTreeMap;

/// A grid the fillers can read and write
pub trait Sheet {
    fn cell(&self, row: u32, col: u32) -> &CellValue;
    fn set_cell(&mut self, row: u32, col: u32, value: CellValue);
    fn max_row(&self) -> u32;
    fn max_column(&self) -> u32;
}

static EMPTY: CellValue = CellValue::Empty;

/// An inclusive block of cells, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u32,
    pub last_row: u32,
    pub last_col: u32,
}

impl CellRange {
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }

    pub fn is_single_cell(&self) -> bool {
        self.first_row == self.last_row && self.first_col == self.last_col
    }
}

/// Width and visibility of a run of columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpan {
    pub first: u32,
    pub last: u32,
    /// Width in character units, `None` for the default
    pub width: Option<f64>,
    pub hidden: bool,
}

/// Height and visibility of one row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowFormat {
    /// Height in points, `None` for the default
    pub height: Option<f64>,
    pub hidden: bool,
}

/// Presentation of a sheet, kept as read from the template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    pub merged: Vec<CellRange>,
    pub columns: Vec<ColumnSpan>,
    pub rows: BTreeMap<u32, RowFormat>,
    /// Style index per cell into the workbook's [`StyleSheet`]
    pub cell_styles: BTreeMap<(u32, u32), u32>,
}

impl SheetLayout {
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
            && self.columns.is_empty()
            && self.rows.is_empty()
            && self.cell_styles.is_empty()
    }

    pub fn style_of(&self, row: u32, col: u32) -> Option<u32> {
        self.cell_styles.get(&(row, col)).copied()
    }
}

/// A single worksheet held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
    max_row: u32,
    max_column: u32,
    layout: SheetLayout,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a sheet from rows of cells starting at A1 (handy for tests)
    pub fn from_rows<R, C>(name: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<CellValue>,
    {
        let mut sheet = Self::new(name);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                sheet.set_cell(r as u32 + 1, c as u32 + 1, value.into());
            }
        }
        sheet
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: SheetLayout) {
        self.layout = layout;
    }

    /// Stored cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> {
        self.cells.iter().map(|(&(r, c), v)| (r, c, v))
    }

    /// Values of one row from column A to `max_column`
    pub fn row_values(&self, row: u32) -> Vec<&CellValue> {
        (1..=self.max_column).map(|c| self.cell(row, c)).collect()
    }

    /// Grow the sheet bounds without storing a cell
    pub fn ensure_bounds(&mut self, max_row: u32, max_column: u32) {
        self.max_row = self.max_row.max(max_row);
        self.max_column = self.max_column.max(max_column);
    }

    /// Trimmed labels of the first of rows 1..=10 holding at least two
    /// non-blank cells; empty when no such row exists
    pub fn header_labels(&self) -> Vec<String> {
        (1..=10)
            .map(|row| {
                self.row_values(row)
                    .into_iter()
                    .filter_map(CellValue::label)
                    .map(|label| label.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .find(|labels| labels.len() >= 2)
            .unwrap_or_default()
    }
}

impl Sheet for Template {
    fn cell(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    fn set_cell(&mut self, row: u32, col: u32, value: CellValue) {
        debug_assert!(row >= 1 && col >= 1, "cells are 1-indexed");
        self.max_row = self.max_row.max(row);
        self.max_column = self.max_column.max(col);
        if value == CellValue::Empty {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    fn max_row(&self) -> u32 {
        self.max_row
    }

    fn max_column(&self) -> u32 {
        self.max_column
    }
}

/// Every sheet of a workbook; the first one is the sheet that gets filled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Template>,
    styles: StyleSheet,
}

impl Workbook {
    pub fn new(sheets: Vec<Template>) -> Self {
        Self {
            sheets,
            styles: StyleSheet::default(),
        }
    }

    pub fn with_styles(sheets: Vec<Template>, styles: StyleSheet) -> Self {
        Self { sheets, styles }
    }

    pub fn sheets(&self) -> &[Template] {
        &self.sheets
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn active(&self) -> Option<&Template> {
        self.sheets.first()
    }

    pub fn active_mut(&mut self) -> Option<&mut Template> {
        self.sheets.first_mut()
    }
}
