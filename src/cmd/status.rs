// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::Config;
use crate::error::{GitError, Result};
use crate::git::remote::RemoteGit;
use crate::workspace::Workspace;

/// Show `git status` of the encrypted mirror.
///
/// # Errors
///
/// Returns an error if the mirror is not initialized or git fails.
pub async fn run_status_command(workspace: &Workspace, config: &Config) -> Result<()> {
    if !workspace.has_mirror() {
        return Err(GitError::NotInitialized {
            path: workspace.mirror_dir().display().to_string(),
        }
        .into());
    }
    RemoteGit::new(&config.tools.git, workspace.mirror_dir())
        .status()
        .await
}
