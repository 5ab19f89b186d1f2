//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

// Skip all CLI tests during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{cell_text, read_range, write_sheet};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn enquiry_fill() -> Command {
    let mut cmd = Command::cargo_bin("enquiry-fill").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("ENQUIRY_FILL_SYNONYMS");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    enquiry_fill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enquiry-fill"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    enquiry_fill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("enquiry-fill"));
}

#[test]
fn test_fill_help() {
    enquiry_fill()
        .args(["fill", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEMPLATE DISCOVERY"));
}

// ═══════════════════════════════════════════════════════════════════════════
// FILL COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fill_with_explicit_paths() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    let data = dir.path().join("data.json");
    let output = dir.path().join("filled.xlsx");
    write_sheet(&template, &[&["Project Name", ""], &["Battery Type", ""]]);
    fs::write(&data, r#"{"project_name": "Alpha", "battery_type": "VRLA"}"#).unwrap();

    enquiry_fill()
        .arg("fill")
        .arg(&data)
        .arg("--template")
        .arg(&template)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("horizontal"))
        .stdout(predicate::str::contains("cells populated"));

    let range = read_range(&output, "Sheet1");
    assert_eq!(cell_text(&range, 1, 2), "Alpha");
    assert_eq!(cell_text(&range, 2, 2), "VRLA");
}

#[test]
fn test_fill_discovers_template_and_names_output() {
    let dir = TempDir::new().unwrap();
    write_sheet(
        &dir.path().join("Sizing Format.xlsx"),
        &[&["Item", "Site 1", "Site 2"], &["Sun hours", "", ""]],
    );
    let data = dir.path().join("sizing.json");
    fs::write(
        &data,
        r#"[{"site_name": "S1", "sun_hours": 5.5}, {"site_name": "S2", "sun_hours": 6}]"#,
    )
    .unwrap();

    enquiry_fill()
        .arg("fill")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sizing Format.xlsx"))
        .stdout(predicate::str::contains("multi-column"));

    let outputs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("Output_sizing_") && name.ends_with(".xlsx"))
        .collect();
    assert_eq!(outputs.len(), 1);

    let range = read_range(&dir.path().join(&outputs[0]), "Sheet1");
    assert_eq!(cell_text(&range, 1, 2), "S1");
    assert_eq!(cell_text(&range, 2, 3), "6");
}

#[test]
fn test_fill_zero_fields_warns() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    let data = dir.path().join("data.json");
    write_sheet(&template, &[&["Item", "Site 1", "Site 2"], &["Battery Type", "", ""]]);
    fs::write(&data, r#"{"battery_type": "VRLA"}"#).unwrap();

    enquiry_fill()
        .arg("fill")
        .arg(&data)
        .arg("-t")
        .arg(&template)
        .arg("-o")
        .arg(dir.path().join("out.xlsx"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No fields were filled"));
}

#[test]
fn test_fill_without_template_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "{}").unwrap();

    enquiry_fill()
        .arg("fill")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn test_fill_rejects_scalar_data() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    let data = dir.path().join("data.json");
    write_sheet(&template, &[&["Project Name", ""]]);
    fs::write(&data, "\"just a string\"").unwrap();

    enquiry_fill()
        .arg("fill")
        .arg(&data)
        .arg("-t")
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported data shape"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECTION COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_detect_command() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    write_sheet(
        &template,
        &[&["Title", "", ""], &["Question", "Site 1", "Site 2"]],
    );

    enquiry_fill()
        .arg("detect")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-column"))
        .stdout(predicate::str::contains("Header row: 2"));
}

#[test]
fn test_headers_command() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.xlsx");
    write_sheet(&template, &[&["Item", "Site 1", "Site 2"]]);

    enquiry_fill()
        .arg("headers")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Site 2"));
}

#[test]
fn test_match_command() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("sld.json");
    fs::write(&data, r#"[{"site_name": "S1", "charge_controller_type": "MPPT"}]"#).unwrap();

    enquiry_fill()
        .args(["match", "MPPT or PWM?"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("charge_controller_type"))
        .stdout(predicate::str::contains("synonym 'mppt or pwm'"));
}

#[test]
fn test_match_command_custom_synonyms() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    let synonyms = dir.path().join("synonyms.yaml");
    fs::write(&data, r#"{"inverter_kva": 5}"#).unwrap();
    fs::write(&synonyms, "- pattern: inverter size\n  candidates: [inverter_kva]\n").unwrap();

    enquiry_fill()
        .args(["match", "Inverter size?"])
        .arg(&data)
        .arg("--synonyms")
        .arg(&synonyms)
        .assert()
        .success()
        .stdout(predicate::str::contains("inverter_kva"));
}

#[test]
fn test_synonyms_command_flags_duplicates() {
    enquiry_fill()
        .arg("synonyms")
        .assert()
        .success()
        .stdout(predicate::str::contains("mppt or pwm"))
        .stdout(predicate::str::contains("Duplicate patterns"));
}
