//! End-to-end tests for the `concentric` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn concentric() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_concentric"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn shows_help() {
    concentric()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("concentric"))
        .stdout(predicate::str::contains("--unknown-first"));
}

#[test]
fn sorts_stdin_unknown_last() {
    concentric()
        .write_stdin("color: red;\ndisplay: block;\nmargin-left: 0;\nzoom: 1;\nposition: absolute;\n")
        .assert()
        .success()
        .stdout("display: block;\nposition: absolute;\nmargin-left: 0;\ncolor: red;\nzoom: 1;\n");
}

#[test]
fn sorts_stdin_unknown_first() {
    concentric()
        .arg("--unknown-first")
        .write_stdin("color: red;\nzoom: 1;\ndisplay: block;\n")
        .assert()
        .success()
        .stdout("zoom: 1;\ndisplay: block;\ncolor: red;\n");
}

#[test]
fn sorts_only_the_selected_lines() {
    concentric()
        .args(["--lines", "2:9", "tests/fixtures/button.css"])
        .assert()
        .success()
        .stdout(
            ".button {\n  display: inline-block;\n  position: relative;\n  margin: 0;\n  padding: 4px 8px;\n  padding: 6px 12px;\n  color: white;\n\n  -webkit-tap-highlight-color: transparent;\n}\n",
        );
}

#[test]
fn cleans_up_blank_and_duplicate_lines() {
    concentric()
        .args(["--lines", "2:9", "--filter-blank-lines", "--dedup", "tests/fixtures/button.css"])
        .assert()
        .success()
        .stdout(
            ".button {\n  display: inline-block;\n  position: relative;\n  margin: 0;\n  padding: 4px 8px;\n  color: white;\n  -webkit-tap-highlight-color: transparent;\n}\n",
        );
}

#[test]
fn settings_file_supplies_custom_order() {
    concentric()
        .args([
            "--lines",
            "2:9",
            "--config",
            "tests/fixtures/settings.json",
            "tests/fixtures/button.css",
        ])
        .assert()
        .success()
        .stdout(
            ".button {\n  color: white;\n  padding: 4px 8px;\n  padding: 6px 12px;\n  margin: 0;\n  display: inline-block;\n  position: relative;\n  -webkit-tap-highlight-color: transparent;\n}\n",
        );
}

#[test]
fn kebab_case_order_file_is_honored() {
    concentric()
        .args([
            "--lines",
            "2:9",
            "--filter-blank-lines",
            "--order",
            "tests/fixtures/order.txt",
            "tests/fixtures/button.css",
        ])
        .assert()
        .success()
        .stdout(
            ".button {\n  -webkit-tap-highlight-color: transparent;\n  margin: 0;\n  padding: 4px 8px;\n  padding: 6px 12px;\n  position: relative;\n  display: inline-block;\n  color: white;\n}\n",
        );
}

#[test]
fn single_line_range_past_end_fails() {
    concentric()
        .args(["--lines", "9"])
        .write_stdin("color: red;\ndisplay: block;\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn single_line_input_is_left_alone() {
    concentric()
        .write_stdin("zoom: 1; color: red;")
        .assert()
        .success()
        .stdout("zoom: 1; color: red;");
}

#[test]
fn strict_mode_rejects_lines_without_separator() {
    concentric()
        .arg("--strict")
        .write_stdin("color: red;\ndisplay block;\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2"));
}

#[test]
fn out_of_range_lines_fail() {
    concentric()
        .args(["--lines", "5:50"])
        .write_stdin("color: red;\ndisplay: block;\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn write_rewrites_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.css");
    fs::write(&path, ".card {\r\n  color: red;\r\n  display: grid;\r\n}\r\n").unwrap();

    concentric()
        .args(["--write", "--lines", "2:3"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ".card {\r\n  display: grid;\r\n  color: red;\r\n}\r\n"
    );
}

#[test]
fn json_format_reports_stats() {
    let output = concentric()
        .args(["--format", "json", "--dedup"])
        .write_stdin("color: red;\ncolor: blue;\ndisplay: block;\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output");
    let report = &json[0];
    assert_eq!(report["input"], "-");
    assert_eq!(report["changed"], true);
    assert_eq!(report["stats"]["duplicates_removed"], 1);
    assert_eq!(report["text"], "display: block;\ncolor: red;\n");
}

#[test]
fn missing_file_fails() {
    concentric()
        .arg("tests/fixtures/nope.css")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.css"));
}
