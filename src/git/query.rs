// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::ClassGitResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or HEAD cannot be read.
pub fn current_branch(path: &Path) -> ClassGitResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check whether a remote-tracking branch has been fetched.
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or the lookup fails.
pub fn remote_branch_exists(path: &Path, remote: &str, branch: &str) -> ClassGitResult<bool> {
    GixBackend::remote_branch_exists(path, remote, branch)
}

/// Paths in the index, relative to the work tree.
///
/// # Errors
///
/// Returns a `GitError` if the repository or its index cannot be read.
pub fn tracked_files(path: &Path) -> ClassGitResult<Vec<PathBuf>> {
    GixBackend::tracked_files(path)
}

/// Check whether a merge was left unfinished in the work tree.
///
/// # Errors
///
/// Returns a `GitError` if the repository or its index cannot be read.
pub fn has_unfinished_merge(path: &Path) -> ClassGitResult<bool> {
    GixBackend::has_unfinished_merge(path)
}
