//! Integration tests for `daylog stats`.

use assert_cmd::prelude::*;
use chrono::{Local, TimeZone};
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use tempfile::{tempdir, TempDir};

fn write(dir: &Path, rel: &str, content: impl AsRef<str>) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content.as_ref()).unwrap();
}

fn set_modified(path: &Path, y: i32, m: u32, d: u32) {
    let when = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::from(when)).unwrap();
}

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let vault = root.join("vault");

    write(&vault, "daily.md", "# Daily");
    write(&vault, "old.md", "# Old");
    set_modified(&vault.join("old.md"), 2024, 3, 1);

    let cfg = root.join("config.toml");
    write(
        root,
        "config.toml",
        format!("version = 1\n[profiles.default]\nvault_root = \"{}\"\n", vault.display()),
    );

    (tmp, cfg, vault)
}

fn daylog(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daylog"));
    cmd.arg("--config").arg(cfg);
    cmd
}

#[test]
fn stats_default_columns() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args(["stats", "--date", "2024-03-01", "--doc", "daily.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended file stats"));

    let content = fs::read_to_string(vault.join("daily.md")).unwrap();
    assert!(content.starts_with(
        "# Daily\n\n| Date |created | modified|\n|-------|----------|----------|\n"
    ));

    // Creation time falls back to modification time where the filesystem has no birth time
    let row = Regex::new(r"(?m)^\|2024-03-01\|[01]\|1\|$").unwrap();
    assert!(row.is_match(&content), "content was: {content}");
}

#[test]
fn stats_rows_follow_date_order() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args([
            "stats",
            "--stat",
            "modified",
            "--date",
            "2024-03-02",
            "--date",
            "2024-03-01",
            "--doc",
            "daily.md",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(vault.join("daily.md")).unwrap();
    assert_eq!(
        content,
        "# Daily\n\n| Date |modified|\n|-------|----------|\n|2024-03-02|0|\n|2024-03-01|1|\n"
    );
}

#[test]
fn stats_unknown_kind_leaves_blank_cell() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args(["stats", "--stat", "words", "--date", "2024-03-01", "--doc", "daily.md"])
        .assert()
        .success();

    let content = fs::read_to_string(vault.join("daily.md")).unwrap();
    assert!(content.ends_with("| Date |words|\n|-------|----------|\n|2024-03-01||\n"));
}

#[test]
fn stats_all_time_includes_past_activity() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args(["stats", "--stat", "modified", "--all-time", "--doc", "daily.md"])
        .assert()
        .success();

    let content = fs::read_to_string(vault.join("daily.md")).unwrap();
    assert!(content.contains("\n|2024-03-01|1|\n"), "content was: {content}");
}

#[test]
fn stats_without_document_is_a_no_op() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args(["stats", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no target document"));

    assert_eq!(fs::read_to_string(vault.join("daily.md")).unwrap(), "# Daily");
}

#[test]
fn stats_dry_run_prints_table() {
    let (_tmp, cfg, vault) = setup();

    daylog(&cfg)
        .args(["stats", "--stat", "modified", "--date", "2024-03-01", "--doc", "daily.md"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Date |modified|"))
        .stdout(predicate::str::contains("|2024-03-01|1|"));

    assert_eq!(fs::read_to_string(vault.join("daily.md")).unwrap(), "# Daily");
}
