#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn catalog() -> PathBuf {
    fixtures_dir().join("signatures.json")
}

fn sigil_cmd() -> Command {
    Command::cargo_bin("sigil-cli").expect("binary should be built")
}

/// Writes `data` to a temp file with the given suffix.
fn target(suffix: &str, data: &[u8]) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("sigil-cli")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(data).expect("write target");
    file.flush().expect("flush");
    file
}

fn json_report(file: &NamedTempFile) -> serde_json::Value {
    let output = sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .arg("--format")
        .arg("json")
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(0));
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn masquerading_zip_is_high_risk() {
    let file = target(".exe", b"PK\x03\x04\x14\x00\x00\x00");
    let parsed = json_report(&file);

    assert_eq!(parsed["risk_level"], "HIGH");
    assert_eq!(parsed["detected_type"], "ZIP archive");
    assert_eq!(parsed["observed_extension"], ".exe");
    assert_eq!(parsed["extension_mismatch"], true);
    assert_eq!(
        parsed["summary"],
        "File extension does not match detected file type"
    );
}

#[test]
fn genuine_png_is_medium_risk() {
    let file = target(".png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR");
    let parsed = json_report(&file);

    assert_eq!(parsed["risk_level"], "MEDIUM");
    assert_eq!(parsed["summary"], "File signature verified");
    assert_eq!(parsed["confidence"], 1.0);
}

#[test]
fn truncated_pdf_header_is_low_risk() {
    let file = target(".pdf", b"%PD\x00\x00\x00");
    let parsed = json_report(&file);

    assert_eq!(parsed["risk_level"], "LOW");
    assert_eq!(parsed["detected_type"], "PDF document");
    assert_eq!(parsed["summary"], "Partial signature match detected");
}

#[test]
fn elf_has_no_extension_constraint() {
    let file = target(".txt", b"\x7fELF\x02\x01\x01\x00");
    let parsed = json_report(&file);

    assert_eq!(parsed["risk_level"], "MEDIUM");
    assert_eq!(parsed["extension_mismatch"], false);
}

#[test]
fn plain_text_is_unknown() {
    let file = target(".txt", b"hello world, nothing magic here");
    let parsed = json_report(&file);

    assert_eq!(parsed["risk_level"], "UNKNOWN");
    assert!(parsed["detected_type"].is_null());
    assert_eq!(parsed["summary"], "No file signature match");
}

#[test]
fn json_output_has_contract_keys() {
    let file = target(".zip", b"PK\x03\x04");
    let parsed = json_report(&file);

    for key in [
        "schema_version",
        "tool",
        "artifact",
        "catalog",
        "file_path",
        "observed_extension",
        "risk_level",
        "summary",
        "matches",
    ] {
        assert!(parsed.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(parsed["schema_version"], "0.1.0");
    assert_eq!(parsed["tool"]["name"], "sigil-cli");
    assert_eq!(parsed["catalog"]["signature_count"], 7);

    let first = &parsed["matches"][0];
    for key in [
        "type_name",
        "category",
        "full_match",
        "partial_match",
        "confidence_score",
        "reason",
        "description",
    ] {
        assert!(first.get(key).is_some(), "missing match key {key}");
    }
}

#[test]
fn json_matches_follow_catalog_order() {
    let file = target(".zip", b"PK\x03\x04");
    let parsed = json_report(&file);

    let names: Vec<&str> = parsed["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["type_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "ZIP archive",
            "PNG image",
            "PDF document",
            "Windows executable",
            "ELF binary",
            "GZIP archive",
            "TAR archive",
        ]
    );
    assert_eq!(parsed["matches"][6]["reason"], "Unable to read required bytes");
}

#[test]
fn json_artifact_has_hash_unless_disabled() {
    let file = target(".zip", b"PK\x03\x04");
    let parsed = json_report(&file);
    assert_eq!(parsed["artifact"]["hash"]["algorithm"], "sha256");
    assert_eq!(parsed["artifact"]["hash"]["value"].as_str().unwrap().len(), 64);

    let output = sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .arg("--json")
        .arg("--no-hash")
        .output()
        .expect("command should run");
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed["artifact"]["hash"].is_null());
    assert_eq!(parsed["artifact"]["size_bytes"], 4);
}

#[test]
fn default_format_is_text() {
    let file = target(".exe", b"PK\x03\x04");
    sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("=== File Inspection Report ==="))
        .stdout(predicate::str::contains("Risk Level: HIGH"))
        .stdout(predicate::str::contains("- ZIP archive"))
        .stdout(predicate::str::contains("Reason: Exact magic number match"));
}

#[test]
fn text_lists_only_positive_matches() {
    let file = target(".zip", b"PK\x03\x04");
    sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .arg("--format")
        .arg("text")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- ZIP archive"))
        .stdout(predicate::str::contains("- PNG image").not())
        .stdout(predicate::str::contains("- TAR archive").not());
}

#[test]
fn out_flag_writes_to_file() {
    let file = target(".zip", b"PK\x03\x04");
    let out = NamedTempFile::new().expect("create temp file");

    sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .arg("--json")
        .arg("--out")
        .arg(out.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let contents = std::fs::read_to_string(out.path()).expect("read output file");
    let parsed: serde_json::Value = serde_json::from_str(&contents).expect("file should be JSON");
    assert_eq!(parsed["risk_level"], "MEDIUM");
}

#[test]
fn missing_arguments_is_usage_error() {
    sigil_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    let file = target(".zip", b"PK\x03\x04");
    sigil_cmd().arg(file.path()).assert().code(1);
}

#[test]
fn invalid_format_is_usage_error() {
    let file = target(".zip", b"PK\x03\x04");
    sigil_cmd()
        .arg(file.path())
        .arg(catalog())
        .arg("--format")
        .arg("xml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_catalog_exits_2() {
    let file = target(".zip", b"PK\x03\x04");
    sigil_cmd()
        .arg(file.path())
        .arg(fixtures_dir().join("does_not_exist.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("signature loading failed"));
}

#[test]
fn inconsistent_catalog_exits_2_naming_type() {
    let file = target(".jpg", b"\xFF\xD8\xFF\xE0");
    sigil_cmd()
        .arg(file.path())
        .arg(fixtures_dir().join("bad_length.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JPEG image"));
}

#[test]
fn catalog_checked_before_target() {
    sigil_cmd()
        .arg("/tmp/does_not_exist_sigil_target.bin")
        .arg(fixtures_dir().join("bad_length.json"))
        .assert()
        .code(2);
}

#[test]
fn missing_target_exits_3() {
    sigil_cmd()
        .arg("/tmp/does_not_exist_sigil_target.bin")
        .arg(catalog())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file inspection failed"));
}

#[test]
fn deterministic_json_across_runs() {
    let file = target(".pdf", b"%PDF-1.7\n");
    let a = json_report(&file);
    let b = json_report(&file);
    assert_eq!(a, b);
}

#[test]
fn help_flag_prints_usage() {
    sigil_cmd()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("magic number"));
}

#[test]
fn version_flag_prints_version() {
    sigil_cmd()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("sigil"));
}

#[cfg(unix)]
#[test]
fn closed_stdout_exits_3() {
    let file = target(".zip", &[0x50, 0x4B, 0x03, 0x04]);
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);

    let output = std::process::Command::new(assert_cmd::cargo::cargo_bin("sigil-cli"))
        .arg(file.path())
        .arg(catalog())
        .stdout(writer)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write report to stdout"));
}
