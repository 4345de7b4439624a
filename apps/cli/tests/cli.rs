//! Binary tests for the command front end.

mod common;

use assert_cmd::Command;

use common::{sample_outline, write_outline};

fn mjolnir() -> Command {
    Command::cargo_bin("mjolnir").unwrap()
}

/// Test read prints progress and writes into ./dist.
#[test]
fn test_read_prints_progress() {
    let (dir, outline) = write_outline(&sample_outline("Cli Deck", 1, 2));

    let output = mjolnir()
        .current_dir(dir.path())
        .args(["read", "--file"])
        .arg(&outline)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mjolnir"));
    assert!(stdout.contains("Deck: Cli Deck"));
    assert!(stdout.contains("Subdeck: Topic 1"));
    assert!(stdout.contains("Card: Question 1.2?"));
    assert!(dir.path().join("dist").join("cli-deck.apkg").exists());
}

/// Test a missing input file is rejected at argument parsing.
#[test]
fn test_read_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = mjolnir()
        .current_dir(dir.path())
        .args(["read", "-p", "nope.md"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert!(!dir.path().join("dist").exists());
}

/// Test a structural error exits non-zero without a package.
#[test]
fn test_read_fails_on_card_without_list() {
    let (dir, outline) = write_outline("# Deck\n\n## Sub\n\n### Orphan\n");

    let output = mjolnir()
        .current_dir(dir.path())
        .args(["read", "--file-path"])
        .arg(&outline)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Orphan"));
    assert!(!dir.path().join("dist").exists());
}

/// Test progress up to a failing card is still printed.
#[test]
fn test_read_reports_progress_before_failure() {
    let (dir, outline) = write_outline("# Deck\n\n## Sub\n\n### Fine\n\n- yes\n\n### Orphan\n");

    let output = mjolnir()
        .current_dir(dir.path())
        .args(["read", "-f"])
        .arg(&outline)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deck: Deck"));
    assert!(stdout.contains("Subdeck: Sub"));
    assert!(stdout.contains("Card: Fine"));
    assert!(!stdout.contains("Card: Orphan"));
    assert!(!stdout.contains("Package:"));
}
