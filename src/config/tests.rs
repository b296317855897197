// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigSource;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.sync.remote, "origin");
    assert_eq!(config.sync.branch, "main");
    assert_eq!(config.sync.commit_message, "Update courses");
    assert!(!config.sync.force_push);
    assert_eq!(config.tools.git, PathBuf::from("git"));
    assert_eq!(config.tools.age, PathBuf::from("age"));
    assert_eq!(config.tools.age_keygen, PathBuf::from("age-keygen"));
    assert_eq!(config.encryption.exclude, vec![".DS_Store", "**/.DS_Store"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "classgit.log"

[sync]
branch = "spring-2026"
force_push = true

[tools]
age = "/opt/age/age"

[encryption]
exclude = ["**/*.tmp"]
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.global.log_file, Some(PathBuf::from("classgit.log")));
    assert_eq!(config.sync.branch, "spring-2026");
    assert!(config.sync.force_push);
    assert_eq!(config.sync.remote, "origin");
    assert_eq!(config.tools.age, PathBuf::from("/opt/age/age"));
    assert_eq!(config.tools.git, PathBuf::from("git"));
    assert_eq!(config.encryption.exclude, vec!["**/*.tmp"]);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.sync.remote, "origin");
    assert_eq!(config.encryption.exclude.len(), 2);
}

#[test]
fn test_deny_unknown_fields_in_section() {
    let err = Config::parse("[sync]\nbrnach = \"main\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("brnach"), "{err:#}");
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_validate_rejects_empty_branch() {
    let err = Config::parse("[sync]\nbranch = \"  \"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'branch' in section '[sync]': must not be empty"
    );
}

#[test]
fn test_validate_rejects_empty_commit_message() {
    let mut config = Config::default();
    config.sync.commit_message = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_glob() {
    let mut config = Config::default();
    config.encryption.exclude = vec!["notes/[".to_string()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("notes/["), "{err}");
}

#[test]
fn test_config_builder_override() {
    let config = Config::builder()
        .add_toml_str("[sync]\nbranch = \"from-file\"\n")
        .set("sync.branch", "from-cli")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.sync.branch, "from-cli");
}

#[test]
fn test_later_sources_win() {
    let config = Config::builder()
        .add_toml_str("[sync]\nremote = \"first\"\nbranch = \"one\"\n")
        .add_toml_str("[sync]\nremote = \"second\"\n")
        .build()
        .unwrap();

    assert_eq!(config.sync.remote, "second");
    assert_eq!(config.sync.branch, "one");
}

#[test]
fn test_env_prefix_overrides_file() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("CLASSGITENVTEST_SYNC__COMMIT_MESSAGE", "from env");
        std::env::set_var("CLASSGITENVTEST_SYNC__FORCE_PUSH", "true");
    }

    let config = Config::builder()
        .add_toml_str("[sync]\ncommit_message = \"from file\"\n")
        .with_env_prefix("CLASSGITENVTEST")
        .build()
        .unwrap();

    assert_eq!(config.sync.commit_message, "from env");
    assert!(config.sync.force_push);
}

#[test]
fn test_config_loader_tracks_files() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("classgit.toml");
    std::fs::write(&present, "[sync]\nbranch = \"dev\"\n").unwrap();
    let missing = temp.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&missing)
        .add_toml_file(&present)
        .add_toml_str("");

    assert_eq!(
        loader.sources(),
        &[ConfigSource::File(present.clone()), ConfigSource::Inline]
    );

    let formatted = loader.format_sources();
    assert_eq!(formatted[0], format!("1. [file] {}", present.display()));
    assert_eq!(formatted[1], "2. [string] <inline toml>");

    let config = loader.build().unwrap();
    assert_eq!(config.sync.branch, "dev");
}

#[test]
fn test_config_loader_lists_env_and_overrides() {
    let loader = ConfigLoader::new()
        .with_env_prefix("CLASSGIT")
        .set("sync.branch", "dev")
        .unwrap();

    insta::assert_snapshot!(loader.format_sources().join("\n"), @r"
    1. [env] CLASSGIT_<SECTION>__<KEY>
    2. [override] sync.branch
    ");
}

#[test]
fn test_config_loader_required_file_missing() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::from_file(temp.path().join("nope.toml"));
    assert!(result.is_err());
}

#[test]
fn test_config_loader_invalid_toml() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[sync\nbranch = ").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::default();
    let first = config.format_options();
    let second = config.format_options();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);

    insta::assert_snapshot!(first.join("\n"), @r"
    encryption/exclude      = .DS_Store, **/.DS_Store
    global/file_log_level   = 5
    global/log_file         = <none>
    global/output_log_level = 3
    sync/branch             = main
    sync/commit_message     = Update courses
    sync/force_push         = false
    sync/remote             = origin
    tools/age               = age
    tools/age_keygen        = age-keygen
    tools/git               = git
    ");
}
