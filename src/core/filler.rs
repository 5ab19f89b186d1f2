use super::{detect_layout, fill_multi_column, fill_vertical};
use crate::matcher::FieldMatcher;
use crate::template::Sheet;
use crate::types::{ExtractedData, FillReport, Layout};
use tracing::{info, warn};

/// Detect the template layout and fill it with the matching strategy.
///
/// Horizontal (unrecognized) templates are filled as vertical ones.
pub fn fill_template<S: Sheet + ?Sized>(
    sheet: &mut S,
    data: &mut ExtractedData,
    matcher: &FieldMatcher,
) -> FillReport {
    let layout = detect_layout(&*sheet);
    info!(layout = %layout, "detected template layout");

    let filled = match layout {
        Layout::MultiColumn { header_row } => fill_multi_column(sheet, data, header_row, matcher),
        Layout::Vertical => fill_vertical(sheet, data, matcher),
        Layout::Horizontal => {
            info!("unrecognized layout, falling back to vertical fill");
            fill_vertical(sheet, data, matcher)
        }
    };

    if filled == 0 {
        warn!(layout = %layout, "no template fields were filled");
    } else {
        info!(filled, "populated template cells");
    }

    FillReport { layout, filled }
}
