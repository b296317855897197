// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-workspace settings stored as single-line text files.
//!
//! ```text
//! config/repo_url.txt     remote URL
//! config/public_key.txt   age recipient used for every push
//! ```

use crate::age::Recipient;
use crate::error::{FsError, Result, WorkspaceError};
use anyhow::Context;
use std::path::Path;

use super::Workspace;

/// Read a setting file, trimmed. Missing or blank files yield `None`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_setting(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let value = content.trim();
            Ok((!value.is_empty()).then(|| value.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FsError::io(path, e).into()),
    }
}

/// Write a setting file with a trailing newline, creating its directory.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_setting(path: &Path, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FsError::io(parent, e))?;
    }
    std::fs::write(path, format!("{}\n", value.trim())).map_err(|e| FsError::io(path, e))?;
    Ok(())
}

/// Settings every sync operation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Git URL of the encrypted repository.
    pub remote_url: String,
    /// Public key files are encrypted to.
    pub recipient: Recipient,
}

impl Settings {
    /// Load stored settings without prompting.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::MissingSetting` when a file is absent and an
    /// age error when the stored public key is malformed.
    pub fn load(workspace: &Workspace) -> Result<Self> {
        let remote_url = require(&workspace.repo_url_path(), "repository URL")?;
        let public_key = require(&workspace.public_key_path(), "public key")?;
        let recipient = Recipient::parse(&public_key)
            .with_context(|| format!("in {}", workspace.public_key_path().display()))?;
        Ok(Self {
            remote_url,
            recipient,
        })
    }

    /// Persist both settings.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be written.
    pub fn save(&self, workspace: &Workspace) -> Result<()> {
        write_setting(&workspace.repo_url_path(), &self.remote_url)?;
        write_setting(&workspace.public_key_path(), self.recipient.as_str())?;
        Ok(())
    }
}

pub(crate) fn require(path: &Path, what: &str) -> Result<String> {
    read_setting(path)?.ok_or_else(|| {
        WorkspaceError::MissingSetting {
            what: what.to_string(),
            path: path.display().to_string(),
        }
        .into()
    })
}
