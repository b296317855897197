// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{ClassGitResult, GitError, GixError};
use std::path::{Path, PathBuf};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Paths name the work tree itself; no upward discovery happens, so a
/// workspace that lives inside another repository is never confused with it.
pub trait GitQuery {
    /// Check if `path` is the root of a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// Works for an unborn branch as well.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or HEAD cannot be read.
    fn current_branch(path: &Path) -> ClassGitResult<Option<String>>;

    /// Check whether `refs/remotes/<remote>/<branch>` exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened or the lookup fails.
    fn remote_branch_exists(path: &Path, remote: &str, branch: &str) -> ClassGitResult<bool>;

    /// Paths recorded in the index, relative to the work tree.
    ///
    /// A repository without an index yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository or its index cannot be read.
    fn tracked_files(path: &Path) -> ClassGitResult<Vec<PathBuf>>;

    /// Check for an interrupted merge: `MERGE_HEAD` present or conflicted
    /// index entries.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository or its index cannot be read.
    fn has_unfinished_merge(path: &Path) -> ClassGitResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Local git operations that modify repository state.
///
/// Network operations live in [`crate::git::remote`] because they need the
/// terminal for credential prompts.
pub trait GitMutation {
    /// Initialize a new repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(&self, path: &Path) -> ClassGitResult<()>;

    /// Point HEAD at `refs/heads/<branch>`, which may not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the symbolic ref cannot be written.
    fn set_head_branch(&self, repo_path: &Path, branch: &str) -> ClassGitResult<()>;

    /// Add a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be added.
    fn add_remote(&self, repo_path: &Path, name: &str, url: &str) -> ClassGitResult<()>;

    /// Stage a file, given relative to the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails or the path is not valid UTF-8.
    fn add(&self, repo_path: &Path, file: &Path) -> ClassGitResult<()>;

    /// Remove a file from the index; a path that is not tracked is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the command fails or the path is not valid UTF-8.
    fn remove_cached(&self, repo_path: &Path, file: &Path) -> ClassGitResult<()>;

    /// Check whether the index differs from HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be run.
    fn has_staged_changes(&self, repo_path: &Path) -> ClassGitResult<bool>;

    /// Commit the index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails (for example, no identity configured).
    fn commit(&self, repo_path: &Path, message: &str) -> ClassGitResult<()>;

    /// Check out `branch` at `target`, discarding local commits, an
    /// interrupted merge, staged and unstaged changes and untracked files.
    ///
    /// Works from an unborn branch as well.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `target` does not resolve or a step fails.
    fn reset_branch(&self, repo_path: &Path, branch: &str, target: &str) -> ClassGitResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GixBackend {
    fn open(path: &Path) -> ClassGitResult<gix::Repository> {
        gix::open(path).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))).into())
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::open(path).is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch(path: &Path) -> ClassGitResult<Option<String>> {
        let repo = Self::open(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn remote_branch_exists(path: &Path, remote: &str, branch: &str) -> ClassGitResult<bool> {
        let repo = Self::open(path)?;
        let name = format!("refs/remotes/{remote}/{branch}");
        let reference = repo
            .try_find_reference(name.as_str())
            .map_err(|e| GitError::Gix(GixError::Reference(e)))?;
        Ok(reference.is_some())
    }

    fn tracked_files(path: &Path) -> ClassGitResult<Vec<PathBuf>> {
        let repo = Self::open(path)?;
        if repo.workdir().is_none() {
            return Err(GitError::Gix(GixError::BareRepository).into());
        }
        let index = repo
            .index_or_empty()
            .map_err(|e| GitError::Gix(GixError::Index(e)))?;
        Ok(index
            .entries()
            .iter()
            .map(|entry| gix::path::from_bstr(entry.path(&index)).into_owned())
            .collect())
    }

    fn has_unfinished_merge(path: &Path) -> ClassGitResult<bool> {
        let repo = Self::open(path)?;
        if repo.git_dir().join("MERGE_HEAD").exists() {
            return Ok(true);
        }
        let index = repo
            .index_or_empty()
            .map_err(|e| GitError::Gix(GixError::Index(e)))?;
        // Stage 0 is the only stage of a resolved entry.
        Ok(index.entries().iter().any(|entry| entry.stage_raw() != 0))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Runs synchronously and never prompts: these commands only touch the
/// local repository.
pub struct ShellBackend {
    program: PathBuf,
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::new("git")
    }
}

impl ShellBackend {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: &[&str], cwd: &Path) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0");
        command
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(&self, args: &[&str], cwd: &Path) -> ClassGitResult<String> {
        tracing::debug!(cmd = %format!("git {}", args.join(" ")), cwd = %cwd.display(), "exec");

        let output = self.command(args, cwd).output().map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to execute {}: {e}", self.program.display()),
            )
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn path_arg(path: &Path) -> ClassGitResult<&str> {
    path.to_str().ok_or_else(|| {
        GitError::InvalidPath {
            path: path.display().to_string(),
        }
        .into()
    })
}

impl GitMutation for ShellBackend {
    fn init_repo(&self, path: &Path) -> ClassGitResult<()> {
        self.git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn set_head_branch(&self, repo_path: &Path, branch: &str) -> ClassGitResult<()> {
        let target = format!("refs/heads/{branch}");
        self.git_command(&["symbolic-ref", "HEAD", &target], repo_path)?;
        Ok(())
    }

    fn add_remote(&self, repo_path: &Path, name: &str, url: &str) -> ClassGitResult<()> {
        self.git_command(&["remote", "add", name, url], repo_path)?;
        Ok(())
    }

    fn add(&self, repo_path: &Path, file: &Path) -> ClassGitResult<()> {
        self.git_command(&["add", "--", path_arg(file)?], repo_path)?;
        Ok(())
    }

    fn remove_cached(&self, repo_path: &Path, file: &Path) -> ClassGitResult<()> {
        self.git_command(
            &[
                "rm",
                "--cached",
                "--quiet",
                "--ignore-unmatch",
                "--",
                path_arg(file)?,
            ],
            repo_path,
        )?;
        Ok(())
    }

    fn has_staged_changes(&self, repo_path: &Path) -> ClassGitResult<bool> {
        // Exit code 1 means "differences found"; anything else non-zero is a failure.
        let output = self
            .command(&["diff", "--cached", "--quiet"], repo_path)
            .output()?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(GitError::CommandFailed {
                command: "git diff --cached --quiet".to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into()),
        }
    }

    fn commit(&self, repo_path: &Path, message: &str) -> ClassGitResult<()> {
        self.git_command(&["commit", "--quiet", "-m", message], repo_path)?;
        Ok(())
    }

    fn reset_branch(&self, repo_path: &Path, branch: &str, target: &str) -> ClassGitResult<()> {
        self.git_command(
            &["checkout", "--quiet", "--force", "-B", branch, target],
            repo_path,
        )?;
        self.git_command(&["reset", "--quiet", "--hard", target], repo_path)?;
        self.git_command(&["clean", "--quiet", "--force", "-d"], repo_path)?;
        Ok(())
    }
}
