//! Template discovery and the load → detect → fill → save pipeline

use crate::core::{detect_layout, fill_template};
use crate::error::{FillError, FillResult};
use crate::excel::{TemplateExporter, TemplateImporter};
use crate::matcher::FieldMatcher;
use crate::template::Template;
use crate::types::{ExtractedData, FillReport, Layout};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Marker a template's file name must contain
const TEMPLATE_MARKER: &str = "Format";
/// Prefix of lock files left by open spreadsheet editors
const LOCK_FILE_PREFIX: &str = "~$";

/// First `.xlsx` file in `dir` (by name) whose name contains `Format`
pub fn find_template_file(dir: &Path) -> FillResult<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_template_name(path))
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn is_template_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.contains(TEMPLATE_MARKER) && name.ends_with(".xlsx") && !name.starts_with(LOCK_FILE_PREFIX)
}

/// `Output_<source stem>_<YYYYmmdd_HHMMSS>.xlsx`
pub fn output_file_name(source: &Path, timestamp: NaiveDateTime) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    format!("Output_{}_{}.xlsx", stem, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Fill the first sheet of `template_path` and save the workbook to `output_path`
pub fn fill_excel_template(
    template_path: &Path,
    output_path: &Path,
    data: &mut ExtractedData,
    matcher: &FieldMatcher,
) -> FillResult<FillReport> {
    let mut workbook = TemplateImporter::new(template_path).import()?;

    let sheet = workbook
        .active_mut()
        .ok_or_else(|| FillError::Excel("Template has no worksheets".to_string()))?;
    let report = fill_template(sheet, data, matcher);

    TemplateExporter::new(&workbook).export(output_path)?;
    info!(
        output = %output_path.display(),
        layout = %report.layout,
        filled = report.filled,
        "saved filled template"
    );

    Ok(report)
}

/// Layout of the first sheet of a template file
pub fn detect_template(template_path: &Path) -> FillResult<Layout> {
    let workbook = TemplateImporter::new(template_path).import()?;
    Ok(workbook.active().map(detect_layout).unwrap_or(Layout::Horizontal))
}

/// Header labels of the first sheet of a template file
pub fn template_headers(template_path: &Path) -> FillResult<Vec<String>> {
    let workbook = TemplateImporter::new(template_path).import()?;
    Ok(workbook
        .active()
        .map(Template::header_labels)
        .unwrap_or_default())
}
