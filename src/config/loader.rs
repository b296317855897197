// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(<root>/config/classgit.toml)
//!   .add_toml_file(--config ...)        later files win
//!   .with_env_prefix("CLASSGIT")        CLASSGIT_SYNC__BRANCH=dev
//!   .set("sync.branch", "dev")          --set, --log-level, ...
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::PathBuf;

use super::Config;
use crate::error::Result;

/// One layer that contributed to a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file that must exist.
    File(PathBuf),
    /// A file that was present when it was added.
    OptionalFile(PathBuf),
    /// TOML given as a string.
    Inline,
    /// `<PREFIX>_<SECTION>__<KEY>` variables.
    Environment(String),
    /// A single `section.key` value.
    Override(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <inline toml>"),
            Self::Environment(prefix) => write!(f, "[env] {prefix}_<SECTION>__<KEY>"),
            Self::Override(key) => write!(f, "[override] {key}"),
        }
    }
}

/// Collects sources in priority order and builds a [`Config`].
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.sources
                .push(ConfigSource::OptionalFile(path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// The double underscore separates section from key so that keys such as
    /// `commit_message` survive intact.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.sources
            .push(ConfigSource::Environment(prefix.to_string()));
        self
    }

    /// Overrides one `section.key`; overrides beat every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be expressed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        self.sources.push(ConfigSource::Override(key.to_string()));
        Ok(self)
    }

    /// Merges every source, deserializes and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, TOML is malformed, a
    /// value has the wrong type or an unknown key is present, or validation
    /// fails.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered source list for `classgit config`.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
