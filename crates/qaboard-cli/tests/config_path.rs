use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url ="));
    assert!(contents.contains("# log_filter ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_path_works_with_broken_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "base_url = 12").unwrap();

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success();

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .env_remove("QABOARD_BASE_URL")
        .arg("questions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_invalid_base_url_flag_is_rejected() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("qaboard")
        .env("QABOARD_HOME", dir.path())
        .args(["--base-url", "not a url", "questions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid URL"));
}
