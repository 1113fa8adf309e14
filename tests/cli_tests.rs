//! Binary-level tests for the haags CLI
//!
//! Each test runs the binary in its own temporary directory so that a stray
//! haags.toml cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn haags(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("haags").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_translate_arguments() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["translate", "Zuiderpark", "Voorwoord"])
        .assert()
        .success()
        .stdout("Zùidâhpark\nVoâhwoâhd\n");
}

#[test]
fn test_translate_stdin_lines() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .arg("translate")
        .write_stdin("Den Haag\nde zee\n")
        .assert()
        .success()
        .stdout("De Haag\nde zei\n");
}

#[test]
fn test_translate_file_jsonl() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("invoer.txt"), "Schilderswijk\n").unwrap();

    haags(&temp)
        .args(["translate", "--file", "invoer.txt", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(
            "{\"type\":\"translation\",\"input\":\"Schilderswijk\",\"output\":\"Schildâhswèk\"}\n",
        );
}

#[test]
fn test_translate_missing_file_exits_with_error() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["translate", "--file", "bestaat-niet.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bestaat-niet.txt"));
}

#[test]
fn test_hits_fired_only() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["hits", "Zuiderpark", "--fired", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ui => hit: true"))
        .stdout(predicate::str::contains("hit: false").not())
        .stdout(predicate::str::is_match(r"4/\d+ rules fired\n$").unwrap());
}

#[test]
fn test_hits_jsonl_ends_with_summary() {
    let temp = TempDir::new().unwrap();
    let output = haags(&temp)
        .args(["hits", "Voorwoord", "--format", "jsonl"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.lines().last().unwrap();
    let summary: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["fired"], 1);
    assert_eq!(summary["output"], "Voâhwoâhd");
}

#[test]
fn test_rules_listing_with_custom_table() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("regels.toml"),
        "[table]\nname = \"klein\"\n\n[[rule]]\npattern = 'oo'\nreplacement = 'au'\n",
    )
    .unwrap();

    haags(&temp)
        .args(["rules", "--rules", "regels.toml", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule table 'klein' (1 rules):"))
        .stdout(predicate::str::contains("1  oo => au"));
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("haags.toml"), "[output]\nformat = \"jsonl\"\n").unwrap();

    haags(&temp)
        .args(["translate", "zee"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"type\":\"translation\""));
}

#[test]
fn test_check_reports_rule_count() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule table 'haags' is valid"));
}

#[test]
fn test_check_rejects_invalid_table() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("kapot.toml"),
        "[[rule]]\npattern = '(oo'\nreplacement = 'au'\n",
    )
    .unwrap();

    haags(&temp)
        .args(["check", "--rules", "kapot.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regex pattern for rule 1"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("haags.toml"), "[engine]\nbacktrack_limit = 0\n").unwrap();

    haags(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("backtrack_limit"));
}

#[test]
fn test_backtrack_limit_failure_exits_with_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("haags.toml"), "[engine]\nbacktrack_limit = 50\n").unwrap();
    let wilders = "Wilders is groot, Wilders is machtig, hij is een lul van één meter tachtig ";

    haags(&temp)
        .args(["translate", wilders])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("failed to match"));

    haags(&temp)
        .args(["hits", wilders])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("failed to match"));
}

#[test]
fn test_hits_human_shows_translation() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["hits", "Voorwoord", "--fired", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output: Voâhwoâhd\n"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    haags(&temp)
        .args(["translate", "-v", "Den Haag"])
        .assert()
        .success()
        .stdout("De Haag\n")
        .stderr(predicate::str::contains("compiled rule table"));
}
