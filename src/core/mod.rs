//! Layout detection and template filling

mod detector;
mod filler;
mod multi_column;
mod vertical;

pub use detector::detect_layout;
pub use filler::fill_template;
pub use multi_column::{assign_slots, fill_multi_column, site_columns, SiteSlot};
pub use vertical::{expand_reserved_keys, fill_vertical};
