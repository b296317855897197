// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{copy_file_async, move_file_async, prune_empty_dirs_async};
use super::walk::{WalkOptions, collect_relative_files, parallel_walk};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn rel_strings(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_parallel_walk() {
    let temp = temp_dir();

    std::fs::create_dir(temp.path().join("subdir")).unwrap();
    std::fs::write(temp.path().join("file1.txt"), "").unwrap();
    std::fs::write(temp.path().join("subdir/file2.txt"), "").unwrap();

    let result = parallel_walk(temp.path(), &WalkOptions::default()).unwrap();

    let mut files = result.files().to_vec();
    files.sort();
    assert_eq!(
        files,
        vec![
            temp.path().join("file1.txt"),
            temp.path().join("subdir/file2.txt")
        ]
    );
    assert_eq!(result.unreadable(), 0);
}

#[test]
fn test_parallel_walk_missing_root() {
    let temp = temp_dir();
    let err = parallel_walk(temp.path().join("gone"), &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().contains("path not found"), "{err}");
}

#[test]
fn test_collect_includes_hidden_and_skips_git() {
    let temp = temp_dir();
    let root = temp.path();

    std::fs::create_dir_all(root.join("math/.git")).unwrap();
    std::fs::write(root.join("math/.git/HEAD"), "ref").unwrap();
    std::fs::write(root.join("math/.notes"), "hidden").unwrap();
    std::fs::write(root.join("math/hw1.pdf"), "pdf").unwrap();
    std::fs::write(root.join("syllabus.md"), "md").unwrap();
    // Ignore files are not consulted.
    std::fs::write(root.join(".gitignore"), "*.pdf\n").unwrap();

    let files = collect_relative_files(root, &WalkOptions::for_sync(), &[]).unwrap();

    insta::assert_snapshot!(rel_strings(&files).join("\n"), @r"
    .gitignore
    math/.notes
    math/hw1.pdf
    syllabus.md
    ");
}

#[test]
fn test_collect_applies_excludes() {
    let temp = temp_dir();
    let root = temp.path();

    std::fs::create_dir_all(root.join("bio/lab")).unwrap();
    std::fs::write(root.join(".DS_Store"), "").unwrap();
    std::fs::write(root.join("bio/.DS_Store"), "").unwrap();
    std::fs::write(root.join("bio/lab/report.docx"), "").unwrap();
    std::fs::write(root.join("bio/lab/report.tmp"), "").unwrap();

    let exclude = vec![
        ".DS_Store".to_string(),
        "**/.DS_Store".to_string(),
        "**/*.tmp".to_string(),
    ];
    let files = collect_relative_files(root, &WalkOptions::for_sync(), &exclude).unwrap();

    assert_eq!(rel_strings(&files), vec!["bio/lab/report.docx"]);
}

#[test]
fn test_collect_missing_root_is_empty() {
    let temp = temp_dir();
    let files =
        collect_relative_files(temp.path().join("courses"), &WalkOptions::for_sync(), &[])
            .unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_collect_rejects_invalid_glob() {
    let temp = temp_dir();
    let result = collect_relative_files(
        temp.path(),
        &WalkOptions::for_sync(),
        &["notes/[".to_string()],
    );
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_collect_follows_symlinked_files() {
    let temp = temp_dir();
    let root = temp.path().join("courses");
    std::fs::create_dir_all(root.join("math")).unwrap();
    let outside = temp.path().join("shared-notes.md");
    std::fs::write(&outside, "notes").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("math/notes.md")).unwrap();

    let files = collect_relative_files(&root, &WalkOptions::for_sync(), &[]).unwrap();

    assert_eq!(rel_strings(&files), vec!["math/notes.md"]);
}

#[cfg(unix)]
#[test]
fn test_collect_fails_on_unreadable_entry() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::write(root.join("hw1.pdf"), "pdf").unwrap();
    std::os::unix::fs::symlink(root.join("gone.pdf"), root.join("hw2.pdf")).unwrap();

    let err = collect_relative_files(root, &WalkOptions::for_sync(), &[]).unwrap_err();

    assert!(err.to_string().ends_with("(1 failed)"), "{err}");
}

#[tokio::test]
async fn test_copy_file_creates_parents() {
    let temp = temp_dir();
    let src = temp.path().join("key.txt");
    std::fs::write(&src, "AGE-SECRET-KEY-1").unwrap();
    let dst = temp.path().join("usb/backup/key.txt");

    copy_file_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "AGE-SECRET-KEY-1");
    assert!(src.exists());
}

#[tokio::test]
async fn test_move_file_replaces_destination() {
    let temp = temp_dir();
    let src = temp.path().join("staged.pdf");
    let dst = temp.path().join("courses/math/hw1.pdf");
    std::fs::create_dir_all(dst.parent().unwrap()).unwrap();
    std::fs::write(&src, "new").unwrap();
    std::fs::write(&dst, "old").unwrap();

    move_file_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new");
    assert!(!src.exists());
}

#[tokio::test]
async fn test_prune_empty_dirs_stops_at_content() {
    let temp = temp_dir();
    let stop = temp.path().join("encrypted");
    std::fs::create_dir_all(stop.join("math/week1/empty")).unwrap();
    std::fs::write(stop.join("math/keep.age"), "").unwrap();

    prune_empty_dirs_async(&stop.join("math/week1/empty"), &stop).await;

    assert!(!stop.join("math/week1").exists());
    assert!(stop.join("math/keep.age").exists());
}
