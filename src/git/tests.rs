// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::core::process::builder::ProcessBuilder;
use crate::git::backend::{GitMutation, ShellBackend};
use crate::git::cmd::{MIRROR_GITIGNORE, ensure_gitignore, init_mirror};
use crate::git::query::{
    current_branch, has_unfinished_merge, is_git_repo, remote_branch_exists, tracked_files,
};
use crate::git::remote::RemoteGit;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git_available() -> bool {
    ProcessBuilder::exists("git")
}

fn init_bare(path: &Path) {
    let output = Command::new("git")
        .args(["init", "--bare", "--quiet"])
        .arg(path)
        .output()
        .expect("git should run");
    assert!(output.status.success(), "{output:?}");
}

fn set_identity(shell: &ShellBackend, repo: &Path) {
    shell
        .git_command(&["config", "user.email", "student@example.com"], repo)
        .unwrap();
    shell
        .git_command(&["config", "user.name", "Student"], repo)
        .unwrap();
}

#[test]
fn test_init_mirror_creates_unborn_branch_with_remote() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let mirror = temp.path().join("encrypted");
    let shell = ShellBackend::default();

    init_mirror(&shell, &mirror, "origin", "https://example.com/me/c.git", "main").unwrap();

    assert!(is_git_repo(&mirror));
    assert_eq!(current_branch(&mirror).unwrap().as_deref(), Some("main"));
    let url = shell
        .git_command(&["remote", "get-url", "origin"], &mirror)
        .unwrap();
    assert_eq!(url, "https://example.com/me/c.git");
    // No commit yet.
    assert!(
        shell
            .git_command(&["rev-parse", "--verify", "HEAD"], &mirror)
            .is_err()
    );
}

#[test]
fn test_ensure_gitignore_writes_and_stages() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let shell = ShellBackend::default();
    shell.init_repo(temp.path()).unwrap();

    ensure_gitignore(&shell, temp.path()).unwrap();
    ensure_gitignore(&shell, temp.path()).unwrap();

    let written = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(written, MIRROR_GITIGNORE);
    assert_eq!(
        tracked_files(temp.path()).unwrap(),
        vec![PathBuf::from(".gitignore")]
    );
}

#[test]
fn test_gitignore_admits_only_artifacts() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let shell = ShellBackend::default();
    shell.init_repo(temp.path()).unwrap();
    ensure_gitignore(&shell, temp.path()).unwrap();

    std::fs::create_dir(temp.path().join("math")).unwrap();
    std::fs::write(temp.path().join("math/hw1.pdf.age"), "x").unwrap();
    std::fs::write(temp.path().join("math/hw1.pdf"), "plaintext").unwrap();

    let untracked = shell
        .git_command(&["ls-files", "--others", "--exclude-standard"], temp.path())
        .unwrap();
    insta::assert_snapshot!(untracked, @"math/hw1.pdf.age");
}

#[tokio::test]
async fn test_push_fetch_reset_through_bare_remote() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let remote_path = temp.path().join("remote.git");
    init_bare(&remote_path);
    let url = remote_path.display().to_string();
    let shell = ShellBackend::default();

    // First device pushes.
    let first = temp.path().join("first");
    init_mirror(&shell, &first, "origin", &url, "main").unwrap();
    set_identity(&shell, &first);
    std::fs::write(first.join("notes.md.age"), "ciphertext").unwrap();
    shell.add(&first, Path::new("notes.md.age")).unwrap();
    assert!(shell.has_staged_changes(&first).unwrap());
    shell.commit(&first, "Update courses").unwrap();
    RemoteGit::new("git", &first)
        .push("origin", "main", false)
        .await
        .unwrap();

    // Second device starts empty, with leftovers from an earlier attempt.
    let second = temp.path().join("second");
    init_mirror(&shell, &second, "origin", &url, "main").unwrap();
    std::fs::write(second.join("notes.md.age"), "local ciphertext").unwrap();
    std::fs::write(second.join("leftover.age"), "untracked").unwrap();
    let remote = RemoteGit::new("git", &second);
    assert!(!remote_branch_exists(&second, "origin", "main").unwrap());
    remote.fetch("origin").await.unwrap();
    assert!(remote_branch_exists(&second, "origin", "main").unwrap());
    shell.reset_branch(&second, "main", "origin/main").unwrap();

    assert_eq!(
        std::fs::read_to_string(second.join("notes.md.age")).unwrap(),
        "ciphertext"
    );
    assert!(!second.join("leftover.age").exists());
    assert_eq!(current_branch(&second).unwrap().as_deref(), Some("main"));
    remote.status().await.unwrap();
}

#[tokio::test]
async fn test_reset_branch_discards_conflicted_merge() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let remote_path = temp.path().join("remote.git");
    init_bare(&remote_path);
    let url = remote_path.display().to_string();
    let shell = ShellBackend::default();

    let commit_artifact = |repo: &Path, content: &str| {
        std::fs::write(repo.join("hw1.pdf.age"), content).unwrap();
        shell.add(repo, Path::new("hw1.pdf.age")).unwrap();
        shell.commit(repo, "Update courses").unwrap();
    };

    let first = temp.path().join("first");
    init_mirror(&shell, &first, "origin", &url, "main").unwrap();
    set_identity(&shell, &first);
    commit_artifact(&first, "base");
    RemoteGit::new("git", &first)
        .push("origin", "main", false)
        .await
        .unwrap();

    let second = temp.path().join("second");
    init_mirror(&shell, &second, "origin", &url, "main").unwrap();
    set_identity(&shell, &second);
    let second_remote = RemoteGit::new("git", &second);
    second_remote.fetch("origin").await.unwrap();
    shell.reset_branch(&second, "main", "origin/main").unwrap();

    // Both sides change the same artifact.
    commit_artifact(&first, "from first");
    RemoteGit::new("git", &first)
        .push("origin", "main", false)
        .await
        .unwrap();
    commit_artifact(&second, "from second");
    second_remote.fetch("origin").await.unwrap();
    assert!(
        shell
            .git_command(&["merge", "--no-edit", "origin/main"], &second)
            .is_err()
    );
    assert!(has_unfinished_merge(&second).unwrap());

    shell.reset_branch(&second, "main", "origin/main").unwrap();

    assert!(!has_unfinished_merge(&second).unwrap());
    assert_eq!(
        std::fs::read_to_string(second.join("hw1.pdf.age")).unwrap(),
        "from first"
    );
}

#[tokio::test]
async fn test_fetch_unknown_remote_fails() {
    if !git_available() {
        return;
    }
    let temp = temp_dir();
    let shell = ShellBackend::default();
    shell.init_repo(temp.path()).unwrap();

    let err = RemoteGit::new("git", temp.path())
        .fetch("nowhere")
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to fetch from 'nowhere'"), "{err:#}");
}
