use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write_config(root: &std::path::Path, logging: &str) -> std::path::PathBuf {
    let vault = root.join("vault");
    fs::create_dir_all(&vault).unwrap();
    fs::write(vault.join("daily.md"), "# Daily").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
vault_root = "{}"

[logging]
{}
"#,
        vault.display(),
        logging
    );
    fs::write(&config_path, config_content).unwrap();
    config_path
}

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("logs/daylog.log");

    let config_path = write_config(
        root,
        &format!("level = \"debug\"\nfile = \"{}\"", log_file.display()),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daylog"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["log", "--created", "--doc", "daily.md"])
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("activity log written"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let config_path = write_config(dir.path(), "level = \"trace\"");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daylog"));
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();
}

#[test]
fn test_logging_split_levels() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("split.log");

    let config_path = write_config(
        root,
        &format!(
            "level = \"error\"\nfile_level = \"debug\"\nfile = \"{}\"",
            log_file.display()
        ),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daylog"));
    cmd.arg("--config")
        .arg(&config_path)
        .args(["stats", "--doc", "daily.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("file stats written").not());

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("generated file stats header"), "log was: {log}");
}
