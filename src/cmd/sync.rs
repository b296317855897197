// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `push` and `pull` handlers shared by the CLI and the menu.

use crate::config::Config;
use crate::error::Result;
use crate::sync::{PullReport, PushReport, pull, push};
use crate::workspace::Workspace;
use crate::workspace::prompt::Prompter;

/// Encrypt and push courses, asking for the public key if none is stored.
///
/// # Errors
///
/// Returns an error if the repository URL is missing, the public key answer
/// is invalid, or the push fails.
pub async fn run_push_command(
    workspace: &Workspace,
    config: &Config,
    prompter: &dyn Prompter,
) -> Result<()> {
    let settings = workspace.push_settings(config, prompter).await?;
    let report = push(workspace, &settings, config).await?;
    println!("{}", push_summary(&report));
    Ok(())
}

/// Pull and decrypt courses.
///
/// # Errors
///
/// Returns an error if the key is missing or the pull fails.
pub async fn run_pull_command(workspace: &Workspace, config: &Config) -> Result<()> {
    let report = pull(workspace, config).await?;
    println!("{}", pull_summary(&report, workspace));
    Ok(())
}

pub(crate) fn push_summary(report: &PushReport) -> String {
    if report.is_empty() {
        return "No course files found to push.".to_string();
    }
    let mut summary = format!(
        "Courses encrypted and pushed ({} encrypted",
        report.encrypted
    );
    if report.removed > 0 {
        summary.push_str(&format!(", {} removed", report.removed));
    }
    summary.push_str("). Local files remain unencrypted.");
    summary
}

pub(crate) fn pull_summary(report: &PullReport, workspace: &Workspace) -> String {
    if report.remote_empty {
        return "The remote has no courses yet.".to_string();
    }
    format!(
        "Courses pulled and decrypted into {} ({} files)",
        workspace.courses_dir().display(),
        report.decrypted
    )
}
