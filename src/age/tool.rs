// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::types::ToolsConfig;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{AgeError, Result};
use crate::utility::fs::copy::ensure_parent_async;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::Recipient;

/// Runs the `age` and `age-keygen` executables.
#[derive(Debug, Clone)]
pub struct AgeTool {
    age: PathBuf,
    age_keygen: PathBuf,
}

impl Default for AgeTool {
    fn default() -> Self {
        Self::new("age", "age-keygen")
    }
}

impl AgeTool {
    #[must_use]
    pub fn new(age: impl Into<PathBuf>, age_keygen: impl Into<PathBuf>) -> Self {
        Self {
            age: age.into(),
            age_keygen: age_keygen.into(),
        }
    }

    #[must_use]
    pub fn from_config(tools: &ToolsConfig) -> Self {
        Self::new(&tools.age, &tools.age_keygen)
    }

    /// Create a new private key at `key_path`.
    ///
    /// The file is restricted to its owner on Unix.
    ///
    /// # Errors
    ///
    /// Returns `AgeError::KeygenFailed` if `age-keygen` exits with failure, or
    /// a process error if it cannot be started.
    pub async fn generate_identity(&self, key_path: &Path) -> Result<()> {
        ensure_parent_async(key_path).await?;

        let output = ProcessBuilder::new(&self.age_keygen)
            .arg("-o")
            .arg(key_path)
            .capture_stderr()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await?;
        if !output.success() {
            return Err(AgeError::KeygenFailed {
                message: output.failure_message(),
            }
            .into());
        }

        restrict_to_owner(key_path)?;
        info!(path = %key_path.display(), "encryption key created");
        Ok(())
    }

    /// Derive the public key that matches the private key at `key_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `age-keygen -y` fails or prints something that is
    /// not a recipient.
    pub async fn recipient_of(&self, key_path: &Path) -> Result<Recipient> {
        let output = ProcessBuilder::new(&self.age_keygen)
            .arg("-y")
            .arg(key_path)
            .capture_output()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await?;
        if !output.success() {
            return Err(AgeError::KeygenFailed {
                message: output.failure_message(),
            }
            .into());
        }

        let line = output.stdout().lines().next().unwrap_or_default();
        Ok(Recipient::parse(line)?)
    }

    /// Encrypt `input` to `recipient`, writing `output`.
    ///
    /// Parent directories of `output` are created. Ciphertext differs on
    /// every call even for identical input.
    ///
    /// # Errors
    ///
    /// Returns `AgeError::EncryptFailed` with age's message if encryption fails.
    pub async fn encrypt_file(
        &self,
        recipient: &Recipient,
        input: &Path,
        output: &Path,
    ) -> Result<()> {
        ensure_parent_async(output).await?;

        let result = ProcessBuilder::new(&self.age)
            .arg("-r")
            .arg(recipient.as_str())
            .arg("-o")
            .arg(output)
            .arg(input)
            .capture_stderr()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await?;
        if !result.success() {
            return Err(AgeError::EncryptFailed {
                path: input.display().to_string(),
                message: result.failure_message(),
            }
            .into());
        }

        debug!(input = %input.display(), output = %output.display(), "encrypted");
        Ok(())
    }

    /// Decrypt `input` with the private key at `identity`, writing `output`.
    ///
    /// # Errors
    ///
    /// Returns `AgeError::DecryptFailed` with age's message if the key does
    /// not match or the file is damaged.
    pub async fn decrypt_file(&self, identity: &Path, input: &Path, output: &Path) -> Result<()> {
        ensure_parent_async(output).await?;

        let result = ProcessBuilder::new(&self.age)
            .arg("-d")
            .arg("-i")
            .arg(identity)
            .arg("-o")
            .arg(output)
            .arg(input)
            .capture_stderr()
            .flag(ProcessFlags::ALLOW_FAILURE)
            .run()
            .await?;
        if !result.success() {
            return Err(AgeError::DecryptFailed {
                path: input.display().to_string(),
                message: result.failure_message(),
            }
            .into());
        }

        debug!(input = %input.display(), output = %output.display(), "decrypted");
        Ok(())
    }
}

/// Restrict `path` to owner read/write.
///
/// # Errors
///
/// Returns an error if the permissions cannot be changed.
#[cfg(unix)]
pub fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| crate::error::FsError::io(path, e))?;
    Ok(())
}

/// Restrict `path` to owner read/write.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}
