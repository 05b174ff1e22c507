//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_schedule, stusched_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    stusched_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".stusched").is_dir());

    let config_path = temp.path().join(".stusched/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("export_dir = \".\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("spring-term");

    stusched_cmd().arg("init").arg(&target).assert().success();

    assert!(target.join(".stusched/config.toml").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_schedule(temp.path());

    stusched_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_set_and_get_export_dir() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(temp.path())
        .args(["config", "export_dir", "printouts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set export_dir = printouts"));

    stusched_cmd()
        .current_dir(temp.path())
        .args(["config", "export_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printouts"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export_dir = ."))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(temp.path())
        .args(["config", "retention"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'retention'"));
}

#[test]
fn test_commands_outside_schedule_fail() {
    let temp = TempDir::new().unwrap();

    stusched_cmd()
        .current_dir(temp.path())
        .args(["subject", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("stusched init"));
}

#[test]
fn test_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(elsewhere.path())
        .env("STUSCHED_ROOT", temp.path())
        .args(["subject", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No subjects added yet."));
}
