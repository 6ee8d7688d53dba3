use daylog_core::config::loader::{ConfigError, ConfigLoader};
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Variable that is never set in the test environment.
const UNSET_VAR: &str = "$DAYLOG_TEST_UNSET_VARIABLE";

const DEFAULT_PROFILE: &str = "version = 1\n[profiles.default]\nvault_root = \"/tmp/vault\"\n";

fn config_with(body: &str) -> (TempDir, PathBuf) {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(&cfg_path, body).unwrap();
    (tmp, cfg_path)
}

fn load(cfg_path: &Path) -> ConfigError {
    ConfigLoader::load(Some(cfg_path), None).unwrap_err()
}

#[test]
fn list_profiles_on_missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");

    match ConfigLoader::list_profiles(Some(&cfg_path)).unwrap_err() {
        ConfigError::NotFound(p) => assert!(p.ends_with("config.toml")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[rstest]
#[case::excluded_folder(format!("excluded_folders = [\"{UNSET_VAR}/templates\"]"))]
#[case::document(format!("document = \"{UNSET_VAR}/daily.md\""))]
#[case::vault_root_reference(format!("document = \"{{{{vault_root}}}}/{UNSET_VAR}.md\""))]
fn unset_variable_in_profile_path_fails(#[case] line: String) {
    let (_tmp, cfg_path) = config_with(&format!("{DEFAULT_PROFILE}{line}\n"));

    match load(&cfg_path) {
        ConfigError::NoHome => {}
        other => panic!("expected NoHome, got {other:?}"),
    }
}

#[test]
fn unset_variable_in_log_file_fails() {
    let body = format!("{DEFAULT_PROFILE}[logging]\nfile = \"{UNSET_VAR}/daylog.log\"\n");
    let (_tmp, cfg_path) = config_with(&body);

    assert!(matches!(load(&cfg_path), ConfigError::NoHome));
}

#[rstest]
#[case::stats_not_a_list("[output]\nstats = \"created\"")]
#[case::make_link_not_a_bool("[output]\nmake_link = \"yes\"")]
#[case::section_headers_not_a_bool("[output]\nsection_headers = 1")]
#[case::excluded_folders_not_a_list(
    "[profiles.other]\nvault_root = \"/tmp\"\nexcluded_folders = \"templates\""
)]
fn wrong_typed_field_fails_to_parse(#[case] section: &str) {
    let (_tmp, cfg_path) = config_with(&format!("{DEFAULT_PROFILE}{section}\n"));

    match load(&cfg_path) {
        ConfigError::ParseError(path, _) => assert!(path.ends_with("config.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn profile_without_vault_root_fails_to_parse() {
    let (_tmp, cfg_path) =
        config_with("version = 1\n[profiles.default]\ndocument = \"daily.md\"\n");

    assert!(matches!(load(&cfg_path), ConfigError::ParseError(..)));
}

#[test]
fn selected_profile_in_file_must_exist() {
    let body = "version = 1\nprofile = \"work\"\n[profiles.home]\nvault_root = \"/tmp/vault\"\n";
    let (_tmp, cfg_path) = config_with(body);

    match load(&cfg_path) {
        ConfigError::ProfileNotFound(p) => assert_eq!(p, "work"),
        other => panic!("expected ProfileNotFound(\"work\"), got {other:?}"),
    }
}

#[test]
fn unsupported_version_and_empty_profiles_are_rejected() {
    let (_tmp, cfg_path) = config_with(&DEFAULT_PROFILE.replace("version = 1", "version = 2"));
    assert!(matches!(load(&cfg_path), ConfigError::BadVersion(2)));

    let (_tmp, cfg_path) = config_with("version = 1\nprofiles = {}\n");
    assert!(matches!(load(&cfg_path), ConfigError::NoProfiles));
    assert!(matches!(
        ConfigLoader::list_profiles(Some(&cfg_path)).unwrap_err(),
        ConfigError::NoProfiles
    ));
}
