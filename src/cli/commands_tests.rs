use super::*;
use crate::excel::{TemplateExporter, TemplateImporter};
use crate::template::{Sheet, Template, Workbook};
use crate::types::CellValue;
use std::fs;
use tempfile::TempDir;

fn write_template(path: &Path, rows: &[&[&str]]) {
    let sheet = Template::from_rows("Sheet1", rows.iter().map(|row| row.iter().copied()));
    TemplateExporter::new(&Workbook::new(vec![sheet]))
        .export(path)
        .unwrap();
}

// =========================================================================
// parent_dir Tests
// =========================================================================

#[test]
fn test_parent_dir_of_bare_file_name() {
    assert_eq!(parent_dir(Path::new("data.json")), PathBuf::from("."));
}

#[test]
fn test_parent_dir_of_nested_file() {
    assert_eq!(
        parent_dir(Path::new("enquiries/BOQ/data.json")),
        PathBuf::from("enquiries/BOQ")
    );
}

// =========================================================================
// fill Tests
// =========================================================================

#[test]
fn test_fill_explicit_template_and_output() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    let data = dir.path().join("data.json");
    let output = dir.path().join("out.xlsx");
    write_template(&template, &[&["Project Name", ""]]);
    fs::write(&data, r#"{"project_name": "Alpha"}"#).unwrap();

    fill(data, Some(template), None, Some(output.clone()), None, true).unwrap();

    let workbook = TemplateImporter::new(&output).import().unwrap();
    let sheet = workbook.active().unwrap();
    assert_eq!(sheet.cell(1, 2), &CellValue::from("Alpha"));
}

#[test]
fn test_fill_searches_given_dir() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    write_template(&templates.join("BOQ Format.xlsx"), &[&["Project Name", ""]]);
    let data = dir.path().join("scope.json");
    fs::write(&data, r#"{"project_name": "Alpha"}"#).unwrap();

    fill(data, None, Some(templates.clone()), None, None, false).unwrap();

    let produced = fs::read_dir(&templates)
        .unwrap()
        .filter_map(Result::ok)
        .any(|e| e.file_name().to_string_lossy().starts_with("Output_scope_"));
    assert!(produced, "output should be written next to the template");
}

#[test]
fn test_fill_no_template_in_dir() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "{}").unwrap();

    let err = fill(data, None, None, None, None, false).unwrap_err();
    assert!(matches!(err, FillError::TemplateNotFound(_)));
}

#[test]
fn test_fill_bad_synonyms_file() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    let data = dir.path().join("data.json");
    let synonyms = dir.path().join("synonyms.yaml");
    write_template(&template, &[&["Project Name", ""]]);
    fs::write(&data, "{}").unwrap();
    fs::write(&synonyms, "- pattern: x\n  candidates: []\n").unwrap();

    let err = fill(data, Some(template), None, None, Some(synonyms), false).unwrap_err();
    assert!(matches!(err, FillError::Config(_)));
}

// =========================================================================
// inspection command Tests
// =========================================================================

#[test]
fn test_detect_missing_template() {
    let err = detect(PathBuf::from("/nonexistent/Format.xlsx")).unwrap_err();
    assert!(matches!(err, FillError::TemplateNotFound(_)));
}

#[test]
fn test_headers_and_detect_succeed() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    write_template(&template, &[&["Item", "Site 1", "Site 2"]]);

    assert!(headers(template.clone()).is_ok());
    assert!(detect(template).is_ok());
}

#[test]
fn test_match_label_with_unmatched_label() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, r#"{"project_name": "Alpha"}"#).unwrap();

    assert!(match_label("Weather station?".to_string(), data, None).is_ok());
}

#[test]
fn test_synonyms_builtin() {
    assert!(synonyms(None).is_ok());
}
