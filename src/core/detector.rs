//! Template layout classification

use crate::matcher::normalize_key;
use crate::template::Sheet;
use crate::types::Layout;

/// Rows searched for a multi-column header row
const HEADER_SCAN_ROWS: u32 = 29;
/// Rows of column A searched for question-style labels
const QUESTION_SCAN_ROWS: u32 = 24;
/// Question rows needed to call a sheet vertical
const MIN_QUESTION_ROWS: usize = 3;
/// Labels this short are never counted as questions
const MIN_QUESTION_CHARS: usize = 5;

/// Classify a template.
///
/// A multi-column header row is looked for first, since a multi-column
/// sheet may also carry question text in column A. Failing that, a sheet
/// with enough question labels in column A is vertical. Anything else is
/// horizontal, which callers fill the same way as vertical.
pub fn detect_layout<S: Sheet + ?Sized>(sheet: &S) -> Layout {
    if let Some(header_row) = find_header_row(sheet) {
        return Layout::MultiColumn { header_row };
    }

    if count_question_rows(sheet) >= MIN_QUESTION_ROWS {
        Layout::Vertical
    } else {
        Layout::Horizontal
    }
}

/// First row whose column A names an item/question column and whose
/// columns B and C both carry a header
fn find_header_row<S: Sheet + ?Sized>(sheet: &S) -> Option<u32> {
    (1..=HEADER_SCAN_ROWS).find(|&row| {
        let a = sheet.cell(row, 1);
        if a.is_blank() || sheet.cell(row, 2).is_blank() || sheet.cell(row, 3).is_blank() {
            return false;
        }
        let a = normalize_key(&a.to_string());
        a.contains("item") || a.contains("question")
    })
}

fn count_question_rows<S: Sheet + ?Sized>(sheet: &S) -> usize {
    let last = QUESTION_SCAN_ROWS.min(sheet.max_row());
    (1..=last)
        .filter_map(|row| sheet.cell(row, 1).as_text())
        .filter(|text| text.chars().count() > MIN_QUESTION_CHARS && text.contains('?'))
        .count()
}
