// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push and pull between `courses/` and the remote, through the mirror.
//!
//! ```text
//! push:  courses/** --age -r--> encrypted/**.age --git add/commit/push--> remote
//! pull:  remote --git fetch/reset--> encrypted/**.age --age -d--> staging --> courses/**
//! ```
//!
//! Files are processed one at a time; each `age` run finishes before the
//! next starts.

pub mod mirror;
pub mod pull;
pub mod push;

#[cfg(test)]
mod tests;

pub use pull::{PullReport, pull};
pub use push::{PushReport, push};

use crate::error::{GitError, Result};
use crate::git::query;
use crate::utility::fs::walk::{WalkOptions, collect_relative_files};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Pre-validated progress bar style for per-file work.
fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} {msg:<10} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Progress bar over `len` files; hidden when stderr is not a terminal.
fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(u64::try_from(len).unwrap_or(u64::MAX));
    bar.set_style(bar_style());
    bar.set_message(message);
    bar
}

/// Fail unless `mirror` is an initialized git work tree.
fn require_mirror(mirror: &Path) -> Result<()> {
    if query::is_git_repo(mirror) {
        Ok(())
    } else {
        Err(GitError::NotInitialized {
            path: mirror.display().to_string(),
        }
        .into())
    }
}

/// Artifacts present in the mirror, relative and sorted.
fn mirror_artifacts(mirror: &Path) -> Result<Vec<PathBuf>> {
    Ok(collect_relative_files(mirror, &WalkOptions::for_sync(), &[])?
        .into_iter()
        .filter(|path| mirror::is_artifact(path))
        .collect())
}
