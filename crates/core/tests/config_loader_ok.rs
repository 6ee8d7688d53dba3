use daylog_core::activity::StatKind;
use daylog_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/vault"
excluded_folders = ["templates", "{{vault_root}}/archive"]
document = "{{vault_root}}/Journal/today.md"

[output]
make_link = false
section_headers = true
stats = ["modified"]
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/vault");
    assert_eq!(
        rc.excluded_folders,
        vec![PathBuf::from("templates"), PathBuf::from("/tmp/vault/archive")]
    );
    assert_eq!(rc.document, Some(PathBuf::from("/tmp/vault/Journal/today.md")));
    assert!(!rc.output.make_link);
    assert!(rc.output.section_headers);
    assert_eq!(rc.output.stat_kinds(), vec![StatKind::Modified]);
}

#[test]
fn output_and_logging_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
vault_root = "/tmp/vault"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert!(rc.excluded_folders.is_empty());
    assert!(rc.document.is_none());
    assert!(rc.output.make_link);
    assert!(!rc.output.section_headers);
    assert_eq!(rc.output.stat_kinds(), vec![StatKind::Created, StatKind::Modified]);
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("daylog/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/def"

[profiles.work]
vault_root = "/tmp/work"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/work");

    let names = ConfigLoader::list_profiles(Some(&cfg_path)).unwrap();
    assert_eq!(names, vec!["default".to_string(), "work".to_string()]);
}

#[test]
fn log_file_expands_vault_root() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[profiles.default]
vault_root = "/tmp/vault"

[logging]
level = "debug"
file_level = "trace"
file = "{{vault_root}}/.daylog/daylog.log"
"#,
    );

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/vault/.daylog/daylog.log")));
}
