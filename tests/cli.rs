use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocket(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("POCKET_LEDGER_DIR", dir.path()).env_remove("POCKET_RATE");
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
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 AUD = 21 TWD"))
        .stdout(predicate::str::contains("Default type:     Expense"));
}

#[test]
fn rate_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .args(["--rate", "20.5", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 AUD = 20.5 TWD"));
}

#[test]
fn rejects_non_positive_rate() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .args(["--rate", "0", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exchange rate must be a positive number"));
}

#[test]
fn rejects_non_numeric_rate() {
    let dir = TempDir::new().unwrap();
    pocket(&dir).args(["--rate", "abc", "config"]).assert().failure();
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    pocket(&dir)
        .args(["--rate", "19", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"exchange_rate\": 19.0"));

    pocket(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 AUD = 19 TWD"));
}
