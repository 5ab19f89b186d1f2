//! Renders extracted values into single spreadsheet cells

use crate::types::{CellValue, FieldValue, Record, Scalar};

/// Render a value as the text of one cell.
///
/// Scalars print as-is, scalar lists join with `", "`, records render as
/// `k: v, k: v` and lists of records put one `k: v | k: v` line per record.
/// Falsy record fields are left out.
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Scalar(s) => s.to_string(),
        FieldValue::List(items) => items
            .iter()
            .map(Scalar::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Records(records) => records
            .iter()
            .map(format_record_row)
            .collect::<Vec<_>>()
            .join("\n"),
        FieldValue::Record(record) => join_fields(record, ", "),
    }
}

/// One record as a `k: v | k: v` row
pub fn format_record_row(record: &Record) -> String {
    join_fields(record, " | ")
}

fn join_fields(record: &Record, separator: &str) -> String {
    record
        .iter()
        .filter(|(_, v)| !v.is_falsy())
        .map(|(k, v)| format!("{}: {}", k, format_value(v)))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Value to write into a cell. Numbers and booleans keep their native cell type.
pub fn to_cell(value: &FieldValue) -> CellValue {
    match value {
        FieldValue::Scalar(Scalar::Null) => CellValue::Empty,
        FieldValue::Scalar(Scalar::Bool(b)) => CellValue::Bool(*b),
        FieldValue::Scalar(Scalar::Number(n)) => match n.as_f64() {
            Some(v) => CellValue::Number(v),
            None => CellValue::Text(n.to_string()),
        },
        other => CellValue::Text(format_value(other)),
    }
}
