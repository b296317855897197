// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch the mirror and decrypt it into `courses/`.
//!
//! ```text
//! key present? --> git fetch --> remote branch exists?
//!   --> reset mirror to <remote>/<branch>
//!   --> age -d every tracked <rel>.age into <root>/.classgit-pull*/<rel>
//!   --> all succeeded: move each into courses/<rel>
//! ```
//!
//! The mirror only ever holds ciphertext derived from `courses/`, so it is
//! reset to the remote instead of merged: local commits from a rejected
//! push are dropped and the next push re-encrypts from `courses/`.
//! Decryption goes to a staging directory first, so a wrong key leaves
//! `courses/` exactly as it was.

use crate::age::AgeTool;
use crate::config::Config;
use crate::error::{AgeError, FsError, Result};
use crate::git::backend::{GitMutation, ShellBackend};
use crate::git::query;
use crate::git::remote::RemoteGit;
use crate::utility::fs::copy::move_file_async;
use crate::workspace::Workspace;
use anyhow::Context;
use tracing::{debug, info};

use super::mirror::plaintext_path;
use super::{progress_bar, require_mirror};

/// Prefix of the staging directory created inside the workspace root.
pub const STAGING_PREFIX: &str = ".classgit-pull";

/// What a pull did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullReport {
    /// Files decrypted into `courses/`.
    pub decrypted: usize,
    /// The remote branch does not exist yet.
    pub remote_empty: bool,
}

/// Fetch the remote branch, reset the mirror to it, then decrypt every
/// artifact.
///
/// Local files with the same path are overwritten; other local files are
/// left alone.
///
/// # Errors
///
/// Returns an error if the private key is missing, the mirror is not
/// initialized, fetch or reset fails, or any artifact fails to decrypt.
pub async fn pull(workspace: &Workspace, config: &Config) -> Result<PullReport> {
    let key = workspace.key_path();
    if !key.is_file() {
        return Err(AgeError::KeyNotFound {
            path: key.display().to_string(),
        }
        .into());
    }

    let mirror = workspace.mirror_dir();
    require_mirror(&mirror)?;

    let remote = &config.sync.remote;
    let branch = &config.sync.branch;
    let git = RemoteGit::new(&config.tools.git, &mirror);

    git.fetch(remote).await?;
    if !query::remote_branch_exists(&mirror, remote, branch)? {
        info!(remote = %remote, branch = %branch, "remote has no courses yet");
        return Ok(PullReport {
            remote_empty: true,
            ..PullReport::default()
        });
    }
    let upstream = format!("{remote}/{branch}");
    ShellBackend::new(&config.tools.git)
        .reset_branch(&mirror, branch, &upstream)
        .with_context(|| format!("failed to reset mirror to '{upstream}'"))?;

    let courses_dir = workspace.courses_dir();
    std::fs::create_dir_all(&courses_dir).map_err(|e| FsError::io(&courses_dir, e))?;

    let artifacts: Vec<_> = query::tracked_files(&mirror)?
        .into_iter()
        .filter_map(|artifact| plaintext_path(&artifact).map(|plain| (artifact, plain)))
        .collect();

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(workspace.root())
        .map_err(|e| FsError::io(workspace.root(), e))?;
    debug!(path = %staging.path().display(), "staging decrypted files");

    let age = AgeTool::from_config(&config.tools);
    let bar = progress_bar(artifacts.len(), "decrypting");
    for (artifact, plain) in &artifacts {
        age.decrypt_file(&key, &mirror.join(artifact), &staging.path().join(plain))
            .await
            .with_context(|| format!("pull aborted at {}; courses left unchanged", artifact.display()))?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    for (_, plain) in &artifacts {
        move_file_async(&staging.path().join(plain), &courses_dir.join(plain)).await?;
    }

    let report = PullReport {
        decrypted: artifacts.len(),
        remote_empty: false,
    };
    info!(
        decrypted = report.decrypted,
        path = %courses_dir.display(),
        "courses pulled and decrypted"
    );
    Ok(report)
}
