//! Integration tests for the bonscan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn scan_emits_json_contract() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bon.txt");
    fs::write(&input, "Brot\n1,99\nMilch\n2,49\nGESAMT\n4,48").unwrap();

    Command::cargo_bin("bonscan")
        .unwrap()
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"calculatedSum\": 4.48"))
        .stdout(predicate::str::contains("\"rawTotal\": \"4,48\""))
        .stdout(predicate::str::contains("Brot"));
}

#[test]
fn scan_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bon.txt");
    fs::write(&input, "SUMME\nEUR 12,34").unwrap();

    Command::cargo_bin("bonscan")
        .unwrap()
        .args(["scan", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("12,34"))
        .stdout(predicate::str::contains("nothing recognized"));
}

#[test]
fn scan_missing_file_fails() {
    Command::cargo_bin("bonscan")
        .unwrap()
        .args(["scan", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_one_json_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::write(dir.path().join("a.txt"), "Brot\n1,99").unwrap();
    fs::write(dir.path().join("b.txt"), "Milch\n2,49").unwrap();

    Command::cargo_bin("bonscan")
        .unwrap()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let a = fs::read_to_string(out.join("a.json")).unwrap();
    assert!(a.contains("\"Brot\""));
    let b = fs::read_to_string(out.join("b.json")).unwrap();
    assert!(b.contains("\"Milch\""));
}
