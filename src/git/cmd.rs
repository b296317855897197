// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local mirror operations built on [`GitMutation`].
//!
//! ```text
//! init_mirror()     mkdir --> git init --> symbolic-ref HEAD --> remote add
//! ensure_gitignore() write "*.age only" rules --> git add .gitignore
//! ```

use crate::error::{FsError, Result};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use super::backend::GitMutation;

/// File name of the mirror's ignore rules.
pub const GITIGNORE: &str = ".gitignore";

/// Ignore rules admitting only `.age` artifacts (and the rules themselves).
pub const MIRROR_GITIGNORE: &str = "*\n!*/\n!*.age\n!.gitignore\n";

/// Create an empty repository at `path` tracking `<remote>/<branch>`.
///
/// No commit is made: the first push creates the root commit, and a fresh
/// device checks out remote history straight from the unborn branch.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any git step fails.
pub fn init_mirror(
    git: &impl GitMutation,
    path: &Path,
    remote: &str,
    url: &str,
    branch: &str,
) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| FsError::io(path, e))?;
    git.init_repo(path)
        .with_context(|| format!("failed to initialize {}", path.display()))?;
    git.set_head_branch(path, branch)?;
    git.add_remote(path, remote, url)?;
    info!(path = %path.display(), remote, branch, "initialized encrypted mirror");
    Ok(())
}

/// Write the mirror's ignore rules when they differ and stage them.
///
/// # Errors
///
/// Returns an error if the file cannot be written or staged.
pub fn ensure_gitignore(git: &impl GitMutation, path: &Path) -> Result<()> {
    let file = path.join(GITIGNORE);
    let current = std::fs::read_to_string(&file).unwrap_or_default();
    if current != MIRROR_GITIGNORE {
        std::fs::write(&file, MIRROR_GITIGNORE).map_err(|e| FsError::io(&file, e))?;
        debug!(path = %file.display(), "wrote mirror ignore rules");
    }
    git.add(path, Path::new(GITIGNORE))?;
    Ok(())
}
