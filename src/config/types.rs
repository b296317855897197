// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, SyncConfig, ToolsConfig, EncryptionConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; relative paths resolve against the workspace root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Remote synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Name of the git remote.
    pub remote: String,
    /// Branch pushed to and pulled from.
    pub branch: String,
    /// Commit message used for every push.
    pub commit_message: String,
    /// Overwrite remote history on push.
    pub force_push: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Update courses".to_string(),
            force_push: false,
        }
    }
}

/// External executables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub git: PathBuf,
    pub age: PathBuf,
    pub age_keygen: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: PathBuf::from("git"),
            age: PathBuf::from("age"),
            age_keygen: PathBuf::from("age-keygen"),
        }
    }
}

/// Which course files get encrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncryptionConfig {
    /// Glob patterns, relative to `courses/`, of files never pushed.
    pub exclude: Vec<String>,
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        Self {
            exclude: vec![".DS_Store".to_string(), "**/.DS_Store".to_string()],
        }
    }
}
