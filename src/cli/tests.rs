// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command_opens_menu() {
    let cli = Cli::try_parse_from(["classgit"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.configs.is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["classgit", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "classgit",
        "--root",
        "/tmp/ClassGit",
        "-l",
        "5",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "-s",
        "sync.branch=dev",
        "push",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Push)));
    assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/ClassGit")));
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.options, vec!["sync.branch=dev"]);
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["classgit", "-l", "7", "push"]).is_err());
}

#[test]
fn test_parse_init_with_values() {
    let cli = Cli::try_parse_from([
        "classgit",
        "init",
        "--remote",
        "git@example.com:student/courses.git",
        "--public-key",
        "age1abc",
    ])
    .unwrap();

    let Some(Command::Init(args)) = cli.command else {
        panic!("expected init");
    };
    let options = args.to_bootstrap_options();
    assert_eq!(
        options.remote_url(),
        Some("git@example.com:student/courses.git")
    );
    assert_eq!(options.public_key(), Some("age1abc"));
}

#[test]
fn test_parse_init_without_values() {
    let cli = Cli::try_parse_from(["classgit", "init"]).unwrap();
    let Some(Command::Init(args)) = cli.command else {
        panic!("expected init");
    };
    let options = args.to_bootstrap_options();
    assert_eq!(options.remote_url(), None);
    assert_eq!(options.public_key(), None);
}

#[test]
fn test_parse_add_device() {
    let cli = Cli::try_parse_from(["classgit", "add-device", "/media/usb/key.txt", "--force"])
        .unwrap();
    let Some(Command::AddDevice(args)) = cli.command else {
        panic!("expected add-device");
    };
    assert_eq!(args.destination, PathBuf::from("/media/usb/key.txt"));
    assert!(args.force);
}

#[test]
fn test_parse_add_device_requires_destination() {
    assert!(Cli::try_parse_from(["classgit", "add-device"]).is_err());
}

#[test]
fn test_parse_config_json() {
    let cli = Cli::try_parse_from(["classgit", "config", "--json"]).unwrap();
    let Some(Command::Config(args)) = cli.command else {
        panic!("expected config");
    };
    assert!(args.json);
}

#[test]
fn test_parse_simple_commands() {
    for (name, expected) in [("pull", "Pull"), ("status", "Status"), ("push", "Push")] {
        let cli = Cli::try_parse_from(["classgit", name]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(format!("{command:?}"), expected);
    }
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "classgit",
        "-l",
        "4",
        "--log-file",
        "logs/classgit.log",
        "-s",
        "sync/force_push=true",
        "-s",
        "tools.age = /opt/age/age",
        "status",
    ])
    .unwrap();

    let overrides = cli.global.to_config_overrides().unwrap();
    let lines: Vec<String> = overrides
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    sync.force_push=true
    tools.age=/opt/age/age
    global.output_log_level=4
    global.file_log_level=4
    global.log_file=logs/classgit.log
    ");
}

#[test]
fn test_file_log_level_overrides_console_level() {
    let cli = Cli::try_parse_from(["classgit", "-l", "2", "--file-log-level", "5", "pull"]).unwrap();
    let overrides = cli.global.to_config_overrides().unwrap();
    assert!(overrides.contains(&("global.file_log_level".to_string(), "5".to_string())));
    assert!(overrides.contains(&("global.output_log_level".to_string(), "2".to_string())));
}

#[test]
fn test_config_overrides_reject_malformed_set() {
    for bad in ["branch=dev", "sync.branch", ".branch=dev"] {
        let cli = Cli::try_parse_from(["classgit", "-s", bad, "push"]).unwrap();
        assert!(cli.global.to_config_overrides().is_err(), "{bad}");
    }
}
