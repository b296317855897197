// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workspace layout and first-run setup.
//!
//! ```text
//! <root>/                       default ~/ClassGit
//!   config/
//!     age_key.txt               private key, never pushed
//!     repo_url.txt
//!     public_key.txt
//!     classgit.toml             optional
//!   courses/                    plaintext, edited by the student
//!   encrypted/                  git mirror of courses/ as <rel>.age
//! ```
//!
//! # Bootstrap
//!
//! ```text
//! mkdir config/ courses/
//!   --> age-keygen (if no key)
//!   --> repo URL (file | --remote | prompt)
//!   --> public key (file | --public-key | prompt, default derived from key)
//!   --> init encrypted/ (if missing)
//! ```

pub mod prompt;
pub mod settings;


use crate::age::{AgeTool, Recipient};
use crate::config::Config;
use crate::error::{ClassGitResult, ConfigError, FsError, Result, WorkspaceError};
use crate::git::backend::ShellBackend;
use crate::git::{cmd, query};
use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use prompt::Prompter;
use settings::{Settings, read_setting, write_setting};

/// Name of the workspace directory under the home directory.
pub const DEFAULT_DIR_NAME: &str = "ClassGit";

/// Prompt for the repository URL.
pub const REMOTE_PROMPT: &str = "Enter your Git repository URL";

/// Prompt for the public key.
pub const PUBLIC_KEY_PROMPT: &str = "Enter the age public key to encrypt courses";

/// Locations inside one workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

/// Values supplied up front instead of prompting.
#[derive(Debug, Clone, Default, Builder)]
pub struct BootstrapOptions {
    #[builder(setters(name = with_remote_url))]
    remote_url: Option<String>,
    #[builder(setters(name = with_public_key))]
    public_key: Option<String>,
}

impl BootstrapOptions {
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    #[must_use]
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}

impl Workspace {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/ClassGit`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
    pub fn default_root() -> ClassGitResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DIR_NAME))
            .ok_or_else(|| ConfigError::NoHomeDir.into())
    }

    /// Use `root` when given, otherwise the default location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if no root is given and the home
    /// directory is unknown.
    pub fn resolve(root: Option<&Path>) -> ClassGitResult<Self> {
        match root {
            Some(root) => Ok(Self::new(root)),
            None => Self::default_root().map(Self::new),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    #[must_use]
    pub fn courses_dir(&self) -> PathBuf {
        self.root.join("courses")
    }

    /// The encrypted git work tree.
    #[must_use]
    pub fn mirror_dir(&self) -> PathBuf {
        self.root.join("encrypted")
    }

    #[must_use]
    pub fn key_path(&self) -> PathBuf {
        self.config_dir().join("age_key.txt")
    }

    #[must_use]
    pub fn repo_url_path(&self) -> PathBuf {
        self.config_dir().join("repo_url.txt")
    }

    #[must_use]
    pub fn public_key_path(&self) -> PathBuf {
        self.config_dir().join("public_key.txt")
    }

    /// Optional TOML configuration inside the workspace.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir().join("classgit.toml")
    }

    /// Whether the encrypted mirror has been initialized.
    #[must_use]
    pub fn has_mirror(&self) -> bool {
        query::is_git_repo(&self.mirror_dir())
    }

    /// Ensure directories, key, settings and mirror exist, asking only for
    /// what is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created, key generation
    /// fails, an answer is empty or not a valid key, or git setup fails.
    pub async fn bootstrap(
        &self,
        config: &Config,
        prompter: &dyn Prompter,
        options: &BootstrapOptions,
    ) -> Result<Settings> {
        for dir in [self.config_dir(), self.courses_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| FsError::io(&dir, e))?;
        }

        let age = AgeTool::from_config(&config.tools);
        let key = self.key_path();
        if key.exists() {
            debug!(path = %key.display(), "using existing key");
        } else {
            age.generate_identity(&key).await?;
        }

        let remote_url = self.remote_url(prompter, options)?;
        let recipient = self.recipient(&age, prompter, options).await?;
        let settings = Settings {
            remote_url,
            recipient,
        };
        settings.save(self)?;

        if self.has_mirror() {
            debug!(path = %self.mirror_dir().display(), "mirror already initialized");
        } else {
            let shell = ShellBackend::new(&config.tools.git);
            cmd::init_mirror(
                &shell,
                &self.mirror_dir(),
                &config.sync.remote,
                &settings.remote_url,
                &config.sync.branch,
            )?;
        }

        info!(root = %self.root.display(), "workspace ready");
        Ok(settings)
    }

    /// Settings for a push, asking for the public key when none is stored.
    ///
    /// An answer is validated and saved like during bootstrap.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::MissingSetting` without a stored repository
    /// URL, or an error if the key answer is empty, invalid or cannot be
    /// saved.
    pub async fn push_settings(&self, config: &Config, prompter: &dyn Prompter) -> Result<Settings> {
        let path = self.public_key_path();
        if read_setting(&path)?.is_some() {
            return Settings::load(self);
        }

        let remote_url = settings::require(&self.repo_url_path(), "repository URL")?;
        let age = AgeTool::from_config(&config.tools);
        let recipient = self
            .recipient(&age, prompter, &BootstrapOptions::default())
            .await?;
        write_setting(&path, recipient.as_str())?;
        info!(path = %path.display(), "saved public key");
        Ok(Settings {
            remote_url,
            recipient,
        })
    }

    fn remote_url(&self, prompter: &dyn Prompter, options: &BootstrapOptions) -> Result<String> {
        let path = self.repo_url_path();
        if let Some(stored) = read_setting(&path)? {
            if let Some(given) = options.remote_url()
                && given.trim() != stored
            {
                warn!(stored = %stored, given = %given, "repository URL already configured; keeping stored value");
            }
            return Ok(stored);
        }

        let answer = match options.remote_url() {
            Some(given) => given.trim().to_string(),
            None => prompter.input(REMOTE_PROMPT, None)?,
        };
        if answer.is_empty() {
            return Err(WorkspaceError::EmptyAnswer {
                what: "repository URL".to_string(),
            }
            .into());
        }
        Ok(answer)
    }

    async fn recipient(
        &self,
        age: &AgeTool,
        prompter: &dyn Prompter,
        options: &BootstrapOptions,
    ) -> Result<Recipient> {
        let path = self.public_key_path();
        if let Some(stored) = read_setting(&path)? {
            return Ok(Recipient::parse(&stored)?);
        }

        let answer = if let Some(given) = options.public_key() {
            given.trim().to_string()
        } else {
            let derived = match age.recipient_of(&self.key_path()).await {
                Ok(recipient) => Some(recipient),
                Err(e) => {
                    debug!(error = %e, "could not derive public key");
                    None
                }
            };
            prompter.input(
                PUBLIC_KEY_PROMPT,
                derived.as_ref().map(Recipient::as_str),
            )?
        };
        if answer.is_empty() {
            return Err(WorkspaceError::EmptyAnswer {
                what: "public key".to_string(),
            }
            .into());
        }

        Ok(Recipient::parse(&answer)?)
    }
}
