//! Runs the `jp-tax` binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn jp_tax(
    store: &Path,
    args: &[&str],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jp-tax"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn show_with_fresh_store() {
    let dir = TempDir::new().unwrap();
    let output = jp_tax(&dir.path().join("inputs.toml"), &["show"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("¥78,617"));
}

#[test]
fn undecodable_store_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");
    fs::write(&path, "salary = 3000000\n").unwrap();

    let output = jp_tax(&path, &["show"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("¥78,617"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read input store"));
}

#[test]
fn set_replaces_undecodable_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");
    fs::write(&path, "salary = [").unwrap();

    let output = jp_tax(&path, &["set", "other-tax-deduction", "77,000"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap().trim(),
        r#"otherTaxDeduction = "77,000""#
    );
}

#[test]
fn unreadable_store_still_shows_breakdown() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");
    fs::create_dir(&path).unwrap();

    let output = jp_tax(&path, &["show"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("¥78,617"));
}

#[test]
fn set_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");

    assert!(jp_tax(&path, &["set", "salary", "6,000,000"]).status.success());
    let output = jp_tax(&path, &["show"]);

    assert!(stdout(&output).contains("6,000,000"));
}
