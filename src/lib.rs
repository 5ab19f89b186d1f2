//! Enquiry Fill - populate Excel templates from extracted document data
//!
//! Extracted data (nested key/value JSON) is placed into a pre-existing
//! template whose layout is not known in advance.
//!
//! # Features
//!
//! - Layout detection: multi-column (one column per site), vertical
//!   (label/value) or horizontal fallback
//! - Label → key matching: exact, substring, then a configurable synonym table
//! - Value formatting for scalars, lists, records and lists of records
//! - Excel import/export that keeps untouched cells, other sheets and the
//!   template's formatting (cell formats, merges, column widths, row heights)
//!
//! # Example
//!
//! ```no_run
//! use enquiry_fill::data::load_extracted;
//! use enquiry_fill::matcher::FieldMatcher;
//! use enquiry_fill::workflow::fill_excel_template;
//! use std::path::Path;
//!
//! let mut data = load_extracted(Path::new("scope.json"))?;
//! let report = fill_excel_template(
//!     Path::new("BOQ Format.xlsx"),
//!     Path::new("Output.xlsx"),
//!     &mut data,
//!     &FieldMatcher::default(),
//! )?;
//!
//! println!("{} layout, {} cells filled", report.layout, report.filled);
//! # Ok::<(), enquiry_fill::error::FillError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod excel;
pub mod formatter;
pub mod matcher;
pub mod template;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use error::{FillError, FillResult};
pub use types::{CellValue, ExtractedData, FieldValue, FillReport, Layout, Scalar};
