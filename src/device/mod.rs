// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copy the private key out so another device can decrypt pulled courses.
//!
//! The exported key is not wrapped or encrypted; moving it safely is up to
//! the operator.


use crate::age::tool::restrict_to_owner;
use crate::error::{AgeError, FsError, Result};
use crate::utility::fs::copy::copy_file_async;
use crate::workspace::Workspace;
use std::path::Path;
use tracing::info;

/// Copy the workspace's private key to `destination`.
///
/// Parent directories are created. An existing destination is replaced only
/// when `overwrite` is set.
///
/// # Errors
///
/// Returns `AgeError::KeyNotFound` when there is no key, `FsError::AlreadyExists`
/// when the destination exists and `overwrite` is false, or an I/O error.
pub async fn export_key(workspace: &Workspace, destination: &Path, overwrite: bool) -> Result<()> {
    let key = workspace.key_path();
    if !key.is_file() {
        return Err(AgeError::KeyNotFound {
            path: key.display().to_string(),
        }
        .into());
    }

    if destination.exists() && !overwrite {
        return Err(FsError::AlreadyExists(destination.display().to_string()).into());
    }
    if destination.is_dir() {
        return Err(FsError::io(
            destination,
            std::io::Error::new(std::io::ErrorKind::IsADirectory, "destination is a directory"),
        )
        .into());
    }

    copy_file_async(&key, destination).await?;
    restrict_to_owner(destination)?;
    info!(path = %destination.display(), "key copied");
    Ok(())
}
