// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encrypt `courses/` into the mirror and publish it.
//!
//! ```text
//! mirror on the configured branch, no unfinished merge
//!   --> collect courses/** (sorted, excludes applied, unreadable entries fatal)
//!   --> nothing here and nothing pushed before? stop
//!   --> .gitignore (only *.age)
//!   --> for each file: age -r --> <rel>.age --> git add
//!   --> drop artifacts whose plaintext is gone
//!   --> git commit (if staged) --> git push -u
//! ```

use crate::age::AgeTool;
use crate::config::Config;
use crate::error::{FsError, GitError, Result};
use crate::git::backend::{GitMutation, ShellBackend};
use crate::git::cmd;
use crate::git::query;
use crate::git::remote::RemoteGit;
use crate::utility::fs::copy::prune_empty_dirs_async;
use crate::utility::fs::walk::{WalkOptions, collect_relative_files};
use crate::workspace::Workspace;
use crate::workspace::settings::Settings;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::mirror::{artifact_path, is_artifact};
use super::{mirror_artifacts, progress_bar, require_mirror};

/// What a push did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushReport {
    /// Course files encrypted into the mirror.
    pub encrypted: usize,
    /// Artifacts deleted because their plaintext no longer exists.
    pub removed: usize,
    /// Whether a commit was created.
    pub committed: bool,
    /// Whether anything was sent to the remote.
    pub pushed: bool,
}

impl PushReport {
    /// True when there were no course files and nothing had been pushed before.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.pushed
    }
}

/// Encrypt every course file to `settings.recipient`, commit and push.
///
/// Every file is re-encrypted on every push. The first failure aborts the
/// push; artifacts already written stay in the mirror.
///
/// # Errors
///
/// Returns an error if the mirror is not initialized, is on another branch
/// or holds an unfinished merge, an entry under `courses/` cannot be read, a
/// file cannot be encrypted or staged, or the commit or push fails.
pub async fn push(workspace: &Workspace, settings: &Settings, config: &Config) -> Result<PushReport> {
    let mirror = workspace.mirror_dir();
    require_mirror(&mirror)?;
    check_mirror_state(&mirror, &config.sync.branch)?;

    let courses_dir = workspace.courses_dir();
    let courses = collect_relative_files(
        &courses_dir,
        &WalkOptions::for_sync(),
        &config.encryption.exclude,
    )?;

    let mut previous: BTreeSet<PathBuf> = mirror_artifacts(&mirror)?.into_iter().collect();
    previous.extend(
        query::tracked_files(&mirror)?
            .into_iter()
            .filter(|path| is_artifact(path)),
    );

    if courses.is_empty() && previous.is_empty() {
        debug!(path = %courses_dir.display(), "no course files");
        return Ok(PushReport::default());
    }

    let shell = ShellBackend::new(&config.tools.git);
    let age = AgeTool::from_config(&config.tools);
    let mut report = PushReport::default();

    cmd::ensure_gitignore(&shell, &mirror)?;

    let bar = progress_bar(courses.len(), "encrypting");
    let mut wanted = BTreeSet::new();
    for rel in &courses {
        let artifact = artifact_path(rel);
        age.encrypt_file(
            &settings.recipient,
            &courses_dir.join(rel),
            &mirror.join(&artifact),
        )
        .await
        .with_context(|| format!("push aborted at {}", rel.display()))?;
        shell.add(&mirror, &artifact)?;
        wanted.insert(artifact);
        report.encrypted += 1;
        bar.inc(1);
    }
    bar.finish_and_clear();

    for stale in previous.difference(&wanted) {
        let path = mirror.join(stale);
        shell.remove_cached(&mirror, stale)?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| FsError::io(&path, e))?;
        }
        if let Some(parent) = path.parent() {
            prune_empty_dirs_async(parent, &mirror).await;
        }
        debug!(path = %stale.display(), "removed stale artifact");
        report.removed += 1;
    }

    if shell.has_staged_changes(&mirror)? {
        shell.commit(&mirror, &config.sync.commit_message)?;
        report.committed = true;
    } else {
        debug!("nothing to commit");
    }

    RemoteGit::new(&config.tools.git, &mirror)
        .push(
            &config.sync.remote,
            &config.sync.branch,
            config.sync.force_push,
        )
        .await?;
    report.pushed = true;

    info!(
        encrypted = report.encrypted,
        removed = report.removed,
        "courses encrypted and pushed"
    );
    Ok(report)
}

/// Refuse to commit on top of an unfinished merge or on a foreign branch.
fn check_mirror_state(mirror: &Path, branch: &str) -> Result<()> {
    if query::has_unfinished_merge(mirror)? {
        return Err(GitError::MergeInProgress {
            path: mirror.display().to_string(),
        }
        .into());
    }
    let head = query::current_branch(mirror)?;
    if head.as_deref() != Some(branch) {
        return Err(GitError::BranchMismatch {
            path: mirror.display().to_string(),
            expected: branch.to_string(),
            found: head.unwrap_or_else(|| "(detached)".to_string()),
        }
        .into());
    }
    Ok(())
}
