// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use std::path::Path;
use tokio::fs;
use tracing::trace;

/// Creates the parent directory of `path` if it has one.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub async fn ensure_parent_async(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| FsError::io(parent, e))?;
    }
    Ok(())
}

/// Copies a single file, creating the destination's parent directories.
///
/// An existing destination is overwritten.
///
/// # Example
/// ```no_run
/// use classgit::utility::fs::copy::copy_file_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_async(Path::new("config/age_key.txt"), Path::new("/media/usb/age_key.txt")).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the source cannot be read or the destination cannot be written.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<()> {
    ensure_parent_async(dst).await?;
    fs::copy(src, dst).await.map_err(|e| FsError::io(src, e))?;
    trace!(src = %src.display(), dst = %dst.display(), "copied");
    Ok(())
}

/// Moves a file into place, replacing whatever is at `dst`.
///
/// Falls back to copy-and-delete when a rename is not possible, such as
/// across filesystems.
///
/// # Errors
///
/// Returns an error if neither the rename nor the copy succeeds.
pub async fn move_file_async(src: &Path, dst: &Path) -> Result<()> {
    ensure_parent_async(dst).await?;
    if fs::rename(src, dst).await.is_ok() {
        trace!(src = %src.display(), dst = %dst.display(), "renamed");
        return Ok(());
    }
    copy_file_async(src, dst).await?;
    fs::remove_file(src).await.map_err(|e| FsError::io(src, e))?;
    Ok(())
}

/// Removes `dir` and each empty ancestor below `stop`.
///
/// Stops at the first directory that still has entries.
pub async fn prune_empty_dirs_async(dir: &Path, stop: &Path) {
    let mut current = Some(dir);
    while let Some(path) = current {
        if path == stop || !path.starts_with(stop) {
            break;
        }
        if fs::remove_dir(path).await.is_err() {
            break;
        }
        trace!(dir = %path.display(), "removed empty directory");
        current = path.parent();
    }
}
