// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git commands that talk to the remote or show output to the user.
//!
//! ```text
//! RemoteGit { git, repo }
//!   .fetch(remote)             git fetch <remote>
//!   .push(remote, branch, f)   git push -u [--force] <remote> <branch>
//!   .status()                  git status
//! ```
//!
//! These run through [`ProcessBuilder`] with inherited stdio so progress and
//! credential prompts reach the terminal unchanged.

use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use anyhow::Context;
use std::path::PathBuf;

/// Git commands bound to one work tree.
#[derive(Debug, Clone)]
pub struct RemoteGit {
    git: PathBuf,
    repo: PathBuf,
}

impl RemoteGit {
    #[must_use]
    pub fn new(git: impl Into<PathBuf>, repo: impl Into<PathBuf>) -> Self {
        Self {
            git: git.into(),
            repo: repo.into(),
        }
    }

    fn command(&self, subcommand: &str) -> ProcessBuilder {
        ProcessBuilder::new(&self.git)
            .arg(subcommand)
            .cwd(&self.repo)
            .name(format!("git {subcommand}"))
            .inherit_stdio()
    }

    /// Download objects and refs from `remote`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started or the fetch fails.
    pub async fn fetch(&self, remote: &str) -> Result<()> {
        self.command("fetch")
            .arg(remote)
            .run()
            .await
            .with_context(|| format!("failed to fetch from '{remote}'"))?;
        Ok(())
    }

    /// Push `branch` to `remote` and record it as upstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the push is rejected or cannot connect.
    pub async fn push(&self, remote: &str, branch: &str, force: bool) -> Result<()> {
        let mut command = self.command("push").arg("-u");
        if force {
            command = command.arg("--force");
        }
        command
            .arg(remote)
            .arg(branch)
            .run()
            .await
            .with_context(|| format!("failed to push '{branch}' to '{remote}'"))?;
        Ok(())
    }

    /// Show `git status` on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started or exits with failure.
    pub async fn status(&self) -> Result<()> {
        self.command("status").run().await?;
        Ok(())
    }
}
