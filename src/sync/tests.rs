// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::mirror::{artifact_path, is_artifact, plaintext_path};
use super::{PushReport, pull, push};
use crate::age::Recipient;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::git::backend::ShellBackend;
use crate::git::cmd::init_mirror;
use crate::workspace::Workspace;
use crate::workspace::settings::Settings;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_RECIPIENT: &str = "age1ql3z7hjy54pw3hyww5ayyfg7zqgvc7w3j2elw8zmrj2kg5sfn9aqmcac8p";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn sample_settings() -> Settings {
    Settings {
        remote_url: "https://example.com/student/courses.git".to_string(),
        recipient: Recipient::parse(SAMPLE_RECIPIENT).unwrap(),
    }
}

#[test]
fn test_artifact_path_appends_extension() {
    insta::assert_snapshot!(
        artifact_path(Path::new("math/week 1/hw1.pdf")).display().to_string(),
        @"math/week 1/hw1.pdf.age"
    );
    assert_eq!(
        artifact_path(Path::new(".notes")),
        PathBuf::from(".notes.age")
    );
}

#[test]
fn test_plaintext_path_inverts_artifact_path() {
    for plain in [
        "syllabus.md",
        "math/hw1.pdf",
        ".notes",
        "archive/old.age",
        "no_extension",
    ] {
        let plain = Path::new(plain);
        let artifact = artifact_path(plain);
        assert!(is_artifact(&artifact), "{}", artifact.display());
        assert_eq!(plaintext_path(&artifact).as_deref(), Some(plain));
    }
}

#[test]
fn test_non_artifacts_are_ignored() {
    for path in [".gitignore", "math/hw1.pdf", ".age", "notes.AGE.txt"] {
        assert!(!is_artifact(Path::new(path)), "{path}");
        assert_eq!(plaintext_path(Path::new(path)), None);
    }
}

#[test]
fn test_push_report_empty() {
    assert!(PushReport::default().is_empty());
    let report = PushReport {
        encrypted: 2,
        pushed: true,
        ..PushReport::default()
    };
    assert!(!report.is_empty());
}

#[tokio::test]
async fn test_push_requires_mirror() {
    let temp = temp_dir();
    let workspace = Workspace::new(temp.path());

    let err = push(&workspace, &sample_settings(), &Config::default())
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("no git repository at "), "{err}");
}

#[tokio::test]
async fn test_pull_requires_key_before_anything_else() {
    let temp = temp_dir();
    let workspace = Workspace::new(temp.path());

    let err = pull(&workspace, &Config::default()).await.unwrap_err();
    assert!(err.to_string().starts_with("private key not found: "), "{err}");
    assert!(!workspace.courses_dir().exists());
}

#[tokio::test]
async fn test_push_with_no_courses_does_nothing() {
    if !ProcessBuilder::exists("git") {
        return;
    }
    let temp = temp_dir();
    let workspace = Workspace::new(temp.path());
    std::fs::create_dir_all(workspace.courses_dir()).unwrap();
    // Excluded files do not count as courses.
    std::fs::write(workspace.courses_dir().join(".DS_Store"), "").unwrap();
    init_mirror(
        &ShellBackend::default(),
        &workspace.mirror_dir(),
        "origin",
        "https://example.com/unreachable.git",
        "main",
    )
    .unwrap();

    let report = push(&workspace, &sample_settings(), &Config::default())
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(!workspace.mirror_dir().join(".gitignore").exists());
}

fn workspace_with_mirror(temp: &TempDir, branch: &str) -> Workspace {
    let workspace = Workspace::new(temp.path());
    std::fs::create_dir_all(workspace.courses_dir()).unwrap();
    init_mirror(
        &ShellBackend::default(),
        &workspace.mirror_dir(),
        "origin",
        "https://example.com/unreachable.git",
        branch,
    )
    .unwrap();
    workspace
}

#[tokio::test]
async fn test_push_refuses_unfinished_merge() {
    if !ProcessBuilder::exists("git") {
        return;
    }
    let temp = temp_dir();
    let workspace = workspace_with_mirror(&temp, "main");
    std::fs::write(workspace.courses_dir().join("hw1.txt"), "answer").unwrap();
    std::fs::write(
        workspace.mirror_dir().join(".git/MERGE_HEAD"),
        "4b825dc642cb6eb9a060e54bf8d69288fbee4904\n",
    )
    .unwrap();

    let err = push(&workspace, &sample_settings(), &Config::default())
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("unfinished merge in "), "{err}");
    assert!(!workspace.mirror_dir().join("hw1.txt.age").exists());
}

#[tokio::test]
async fn test_push_refuses_other_branch() {
    if !ProcessBuilder::exists("git") {
        return;
    }
    let temp = temp_dir();
    let workspace = workspace_with_mirror(&temp, "spring");
    std::fs::write(workspace.courses_dir().join("hw1.txt"), "answer").unwrap();

    let err = push(&workspace, &sample_settings(), &Config::default())
        .await
        .unwrap_err();

    assert!(
        err.to_string()
            .ends_with("is on 'spring', expected branch 'main'"),
        "{err}"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_push_aborts_on_unreadable_course_entry() {
    if !ProcessBuilder::exists("git") {
        return;
    }
    let temp = temp_dir();
    let workspace = workspace_with_mirror(&temp, "main");
    let courses = workspace.courses_dir();
    std::fs::write(courses.join("hw1.txt"), "answer").unwrap();
    std::os::unix::fs::symlink(courses.join("moved.txt"), courses.join("hw2.txt")).unwrap();

    let err = push(&workspace, &sample_settings(), &Config::default())
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("could not read every entry under "), "{err}");
    assert!(!workspace.mirror_dir().join(".gitignore").exists());
    assert!(!workspace.mirror_dir().join("hw1.txt.age").exists());
}
