use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const REFERENCE: &str = r#"[
    {"code": "4567", "name": "X"},
    {"code": "01.11", "name": "Growing cereals"},
    "ignored"
]"#;

fn write_reference(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("okved.json");
    fs::write(&path, REFERENCE).expect("write reference");
    path
}

fn run_cmd(temp: &TempDir, reference: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("okved");
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .env_remove("RUST_LOG")
        .args(["--file", reference.to_str().expect("reference path")])
        .args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    cmd.output().expect("run command")
}

#[test]
fn cli_play_matches_phone_argument() {
    let temp = TempDir::new().expect("temp dir");
    let reference = write_reference(&temp);

    let output = run_cmd(&temp, &reference, &["--json", "play", "8 999 123-45-67"], None);
    assert!(output.status.success(), "command failed: {:?}", output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["status"], "match");
    assert_eq!(value["normalized_phone"], "+79991234567");
    assert_eq!(value["code"], "4567");
    assert_eq!(value["name"], "X");
    assert_eq!(value["match_length"], 4);
    assert_eq!(value["used_fallback"], false);
}

#[test]
fn cli_play_prompts_for_phone() {
    let temp = TempDir::new().expect("temp dir");
    let reference = write_reference(&temp);

    let output = run_cmd(&temp, &reference, &["play"], Some("+7 (999) 123-45-67\n"));
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Phone number:"));
    assert!(stdout.contains("- normalized phone: +79991234567"));
    assert!(stdout.contains("- OKVED: 4567 - X"));
    assert!(stdout.contains("- fallback used: false"));
}

#[test]
fn cli_play_rejects_phone_without_digits() {
    let temp = TempDir::new().expect("temp dir");
    let reference = write_reference(&temp);

    let output = run_cmd(&temp, &reference, &["--json", "play", "no digits here"], None);
    assert_eq!(output.status.code(), Some(3));
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["status"], "error");
    assert_eq!(value["kind"], "NO_DIGITS");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("NO_DIGITS"));
}

#[test]
fn cli_play_treats_closed_stdin_as_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let reference = write_reference(&temp);

    let output = run_cmd(&temp, &reference, &["play"], Some(""));
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_play_reports_missing_reference_file() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.json");

    let output = run_cmd(&temp, &missing, &["play", "89991234567"], None);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("could not load the reference list"));
}

#[test]
fn cli_check_counts_usable_entries() {
    let temp = TempDir::new().expect("temp dir");
    let reference = write_reference(&temp);

    let output = run_cmd(&temp, &reference, &["--json", "check"], None);
    assert!(output.status.success(), "command failed: {:?}", output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["source"], "file");
    assert_eq!(value["entries"], 2);
}
