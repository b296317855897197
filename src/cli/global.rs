// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --root DIR        ← workspace root (or CLASSGIT_ROOT), default ~/ClassGit
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← global.log_file override
//! --set KEY=VAL     ← Direct config override, e.g. sync.branch=dev
//!
//! Precedence: CLI flags > --set > env > --config > classgit.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::{ClassGitError, ClassGitResult, ConfigError};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Workspace root containing config/, courses/ and encrypted/.
    #[arg(long, value_name = "DIR", env = "CLASSGIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'sync.branch=dev' or 'sync/force_push=true'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// Keys use dots; `section/key` is accepted as well.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for a `--set` without `=`, or
    /// without a section.
    pub fn to_config_overrides(&self) -> ClassGitResult<Vec<(String, String)>> {
        let mut overrides = Vec::new();

        for option in &self.options {
            let Some((key, value)) = option.split_once('=') else {
                return Err(invalid_option(option, "expected KEY=VALUE"));
            };
            let key = key.trim().replace('/', ".");
            if !key.contains('.') || key.starts_with('.') || key.ends_with('.') {
                return Err(invalid_option(option, "expected section.key"));
            }
            overrides.push((key, value.trim().to_string()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        Ok(overrides)
    }
}

fn invalid_option(option: &str, message: &str) -> ClassGitError {
    ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "set".to_string(),
        message: format!("'{option}': {message}"),
    }
    .into()
}
