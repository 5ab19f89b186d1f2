//! Multi-site templates: labels in column A, one column per site/system

use crate::formatter::{format_value, to_cell};
use crate::matcher::FieldMatcher;
use crate::template::Sheet;
use crate::types::{CellValue, ExtractedData, Record, SITE_NAME_KEY};
use tracing::{debug, info, warn};

const LABEL_COLUMN: u32 = 1;
const FIRST_SITE_COLUMN: u32 = 2;
const LAST_SITE_COLUMN: u32 = 19;

/// A system bound to a template column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSlot {
    /// Index into the `systems` list
    pub system: usize,
    pub site_name: String,
    pub column: u32,
}

/// Non-blank header columns B..S (bounded by the sheet width), left to right
pub fn site_columns<S: Sheet + ?Sized>(sheet: &S, header_row: u32) -> Vec<u32> {
    let last = LAST_SITE_COLUMN.min(sheet.max_column());
    (FIRST_SITE_COLUMN..=last)
        .filter(|&col| !sheet.cell(header_row, col).is_blank())
        .collect()
}

/// Bind systems to site columns by position.
///
/// System `i` takes the `i`-th site column regardless of any site name
/// already in the header or the data. Systems beyond the last column get no
/// slot; columns beyond the last system stay unassigned.
pub fn assign_slots(systems: &[Record], columns: &[u32]) -> Vec<SiteSlot> {
    systems
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(idx, (system, &column))| SiteSlot {
            system: idx,
            site_name: system
                .get(SITE_NAME_KEY)
                .map(format_value)
                .unwrap_or_else(|| format!("System_{}", idx + 1)),
            column,
        })
        .collect()
}

/// Fill one column per system below `header_row`.
///
/// Labels are matched once per row against the first system's keys, which
/// stand in for every system's schema. Each assigned system then gets its
/// own value for that key (empty text when it lacks the key). Header cells
/// of assigned columns are replaced with the systems' site names. Returns
/// the number of value cells written; zero when `systems` is missing.
pub fn fill_multi_column<S: Sheet + ?Sized>(
    sheet: &mut S,
    data: &ExtractedData,
    header_row: u32,
    matcher: &FieldMatcher,
) -> usize {
    let systems = data.systems();
    if systems.is_empty() {
        warn!("no 'systems' list in data; multi-column template left unfilled");
        return 0;
    }

    let columns = site_columns(sheet, header_row);
    let slots = assign_slots(systems, &columns);
    info!(
        systems = systems.len(),
        site_columns = columns.len(),
        assigned = slots.len(),
        "assigning systems to site columns"
    );
    if systems.len() > slots.len() {
        warn!(
            dropped = systems.len() - slots.len(),
            "more systems than site columns; extra systems skipped"
        );
    }

    for slot in &slots {
        sheet.set_cell(header_row, slot.column, CellValue::Text(slot.site_name.clone()));
    }

    let keys: Vec<&str> = systems[0].keys().map(String::as_str).collect();
    let mut filled = 0;

    for row in header_row + 1..=sheet.max_row() {
        let Some(label) = sheet.cell(row, LABEL_COLUMN).label() else {
            continue;
        };
        let Some(found) = matcher.find_match(&label, &keys) else {
            continue;
        };

        for slot in &slots {
            let value = systems[slot.system]
                .get(found.key)
                .map(to_cell)
                .unwrap_or_else(|| CellValue::Text(String::new()));
            sheet.set_cell(row, slot.column, value);
            filled += 1;
        }

        debug!(row, label = %label, key = found.key, strategy = %found.strategy, "mapped");
    }

    filled
}
