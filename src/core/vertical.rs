//! Label/value templates: question in column A, answer in column B

use crate::formatter::{format_record_row, to_cell};
use crate::matcher::FieldMatcher;
use crate::template::Sheet;
use crate::types::{ExtractedData, FieldValue, Scalar, EQUIPMENT_LIST_KEY, ITEMS_KEY};
use tracing::{debug, trace};

const LABEL_COLUMN: u32 = 1;
const VALUE_COLUMN: u32 = 2;

/// Fill column B next to every matched column-A label.
///
/// Reserved keys are expanded into `data` first (see
/// [`expand_reserved_keys`]). Returns the number of cells written.
pub fn fill_vertical<S: Sheet + ?Sized>(
    sheet: &mut S,
    data: &mut ExtractedData,
    matcher: &FieldMatcher,
) -> usize {
    expand_reserved_keys(data);

    let data: &ExtractedData = data;
    let keys = data.keys();
    let mut filled = 0;

    for row in 1..=sheet.max_row() {
        let label = match sheet.cell(row, LABEL_COLUMN).as_text() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => continue,
        };

        let Some(found) = matcher.find_match(&label, &keys) else {
            trace!(row, label = %label, "no matching key");
            continue;
        };

        let value = data.get(found.key).map(to_cell).unwrap_or_default();
        sheet.set_cell(row, VALUE_COLUMN, value);
        filled += 1;

        debug!(
            row,
            label = %label.chars().take(40).collect::<String>(),
            key = found.key,
            strategy = %found.strategy,
            "mapped"
        );
    }

    filled
}

/// Fold `items` into `equipment_list` and lift the first system's fields to
/// the top level where no top-level key of that name exists.
///
/// Existing keys are never removed.
pub fn expand_reserved_keys(data: &mut ExtractedData) {
    if let Some(items) = data.get(ITEMS_KEY).and_then(fold_items) {
        data.insert(EQUIPMENT_LIST_KEY, FieldValue::text(items));
    }

    if let Some(first) = data.systems().first().cloned() {
        for (key, value) in first {
            if !data.contains_key(&key) {
                data.insert(key, value);
            }
        }
    }
}

/// One line per item
fn fold_items(items: &FieldValue) -> Option<String> {
    let lines: Vec<String> = match items {
        FieldValue::Records(records) => records.iter().map(format_record_row).collect(),
        FieldValue::List(values) => values.iter().map(Scalar::to_string).collect(),
        _ => return None,
    };
    Some(lines.join("\n"))
}
