// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for classgit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/config/classgit.toml (optional)
//! 3. --config FILE (repeatable)
//! 4. CLASSGIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CLASSGIT_SYNC__BRANCH=dev          → sync.branch = "dev"
//! CLASSGIT_SYNC__FORCE_PUSH=true     → sync.force_push = true
//! CLASSGIT_TOOLS__AGE=/opt/age/age   → tools.age = "/opt/age/age"
//! ```
//!
//! The remote URL and public key are not part of this file; they live in
//! plain text next to the private key (see [`crate::workspace::settings`]).

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{EncryptionConfig, GlobalConfig, SyncConfig, ToolsConfig};

/// Complete application configuration.
///
/// Unknown top-level keys are tolerated because `CLASSGIT_ROOT` shares the
/// environment prefix; every section rejects unknown fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Remote synchronization.
    pub sync: SyncConfig,
    /// External tool paths.
    pub tools: ToolsConfig,
    /// Encryption file selection.
    pub encryption: EncryptionConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use classgit::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("config/classgit.toml")
    ///     .with_env_prefix("CLASSGIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty remote, branch or
    /// commit message, or for an exclude pattern that is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("remote", &self.sync.remote),
            ("branch", &self.sync.branch),
            ("commit_message", &self.sync.commit_message),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "sync".to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                }
                .into());
            }
        }

        for pattern in &self.encryption.exclude {
            if let Err(e) = wax::Glob::new(pattern) {
                return Err(ConfigError::InvalidValue {
                    section: "encryption".to_string(),
                    key: "exclude".to_string(),
                    message: format!("invalid glob '{pattern}': {e}"),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Format configuration options for display, one `section/key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global/output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global/file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global/log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
        );

        options.insert("sync/remote", self.sync.remote.clone());
        options.insert("sync/branch", self.sync.branch.clone());
        options.insert("sync/commit_message", self.sync.commit_message.clone());
        options.insert("sync/force_push", self.sync.force_push.to_string());

        options.insert("tools/git", self.tools.git.display().to_string());
        options.insert("tools/age", self.tools.age.display().to_string());
        options.insert(
            "tools/age_keygen",
            self.tools.age_keygen.display().to_string(),
        );

        options.insert("encryption/exclude", self.encryption.exclude.join(", "));

        let width = options.keys().map(|k| k.len()).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:width$} = {value}"))
            .collect()
    }
}
