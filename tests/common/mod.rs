//! Shared fixtures: small .xlsx templates written with rust_xlsxwriter

#![allow(dead_code)]

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Formula, Workbook};
use std::path::Path;

/// Write a workbook; empty strings leave the cell blank.
pub fn write_template(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Single-sheet template named "Sheet1"
pub fn write_sheet(path: &Path, rows: &[&[&str]]) {
    write_template(path, &[("Sheet1", rows)]);
}

/// Single-sheet template with one extra formula cell (0-indexed position)
pub fn write_sheet_with_formula(path: &Path, rows: &[&[&str]], at: (u32, u16), formula: &str) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    worksheet
        .write_formula(at.0, at.1, Formula::new(formula))
        .unwrap();
    workbook.save(path).unwrap();
}

/// Label/value sheet with a merged bold title over A1:C1, a bordered answer
/// cell at B2, a `yyyy-mm-dd` date at B3 and column A 30 wide
pub fn write_formatted_sheet(path: &Path) {
    let title = Format::new().set_bold().set_align(FormatAlign::Center);
    let answer = Format::new().set_border(FormatBorder::Thin);
    let date = Format::new().set_num_format("yyyy-mm-dd");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1").unwrap();
    worksheet
        .merge_range(0, 0, 0, 2, "Enquiry Summary", &title)
        .unwrap();
    worksheet.write_string(1, 0, "Project Name").unwrap();
    worksheet.write_blank(1, 1, &answer).unwrap();
    worksheet.write_string(2, 0, "Date of Enquiry").unwrap();
    worksheet.write_number_with_format(2, 1, 45672.0, &date).unwrap();
    worksheet.write_string(3, 0, "Battery Type").unwrap();
    worksheet.set_column_width(0, 30).unwrap();
    workbook.save(path).unwrap();
}

pub fn read_range(path: &Path, sheet: &str) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.worksheet_range(sheet).unwrap()
}

/// Cell text at a 1-indexed (row, col); blank cells read as ""
pub fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row - 1, col - 1)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
