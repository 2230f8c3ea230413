//! Non-interactive subcommands of the `pocket` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocket(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("POCKET_LEDGER_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn config_shows_paths_and_defaults() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency symbol:  $"))
        .stdout(predicate::str::contains("date ↓"));
}

#[test]
fn init_writes_settings_once() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    pocket(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));
}

#[test]
fn categories_follow_the_settings_file() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary\nFreelance\nGroceries\nRent\nUtilities\n"));

    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "baseline_categories": ["Pets", "Travel"] }"#,
    )
    .unwrap();
    pocket(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout("Pets\nTravel\n");
}

#[test]
fn config_dir_flag_overrides_environment() {
    let dir = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    pocket(&dir)
        .arg("--config-dir")
        .arg(other.path())
        .arg("init")
        .assert()
        .success();
    assert!(other.path().join("config.json").exists());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn broken_settings_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "not json").unwrap();
    pocket(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn read_only_commands_leave_no_files() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("fresh");
    for command in ["categories", "config"] {
        pocket(&dir)
            .env("POCKET_LEDGER_DIR", &base)
            .arg(command)
            .assert()
            .success();
    }
    assert!(!base.exists());
}
