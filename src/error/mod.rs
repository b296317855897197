// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types.
//!
//! ```text
//!                 ClassGitError (boxed variants)
//!                         |
//!   +------+------+-------+------+------+------+----+
//!   v      v      v       v      v      v      v    v
//!  Git    Age   Config  Process  Fs  Workspace  Io
//!   |
//!   +-- Gix (open, HEAD, index, references)
//! ```
//!
//! Domain errors convert straight into `anyhow::Error` and keep their own
//! message; `ClassGitError` adds a short category prefix for callers that
//! need one error type (`git::backend`, prompts, CLI overrides).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ClassGitError`].
pub type ClassGitResult<T> = std::result::Result<T, ClassGitError>;

/// Error for the synchronous building blocks.
///
/// Every variant is boxed so results stay two words wide.
#[derive(Debug, Error)]
pub enum ClassGitError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Encryption or decryption failed.
    #[error("age error: {0}")]
    Age(#[from] Box<AgeError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Workspace setup error.
    #[error("workspace error: {0}")]
    Workspace(#[from] Box<WorkspaceError>),

    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ClassGitError {
                fn from(err: $error) -> Self {
                    ClassGitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    AgeError => Age,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    WorkspaceError => Workspace,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Errors from read-only repository queries through gix.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open the repository at an exact path.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Failed to read the repository index.
    #[error("failed to access index: {0}")]
    Index(#[from] gix::worktree::open_index::Error),

    /// Failed to look up a reference.
    #[error("failed to look up reference: {0}")]
    Reference(#[from] gix::reference::find::Error),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The encrypted mirror has not been initialized yet.
    #[error("no git repository at {path} (run `classgit init` first)")]
    NotInitialized { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// A merge was left unfinished in the mirror.
    #[error("unfinished merge in {path} (run `classgit pull` to reset the mirror)")]
    MergeInProgress { path: String },

    /// The mirror's HEAD is not the configured branch.
    #[error("mirror {path} is on '{found}', expected branch '{expected}'")]
    BranchMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Path could not be passed to git.
    #[error("path is not valid UTF-8: {path}")]
    InvalidPath { path: String },
}

// --- Age Errors ---

/// Encryption errors.
#[derive(Debug, Error)]
pub enum AgeError {
    /// Public key does not look like an age recipient.
    #[error("invalid age public key '{key}': expected 'age1' followed by 58 bech32 characters")]
    InvalidRecipient { key: String },

    /// Private key file is missing.
    #[error("private key not found: {path}")]
    KeyNotFound { path: String },

    /// Encrypting a file failed.
    #[error("failed to encrypt {path}: {message}")]
    EncryptFailed { path: String, message: String },

    /// Decrypting a file failed (wrong or missing key, corrupt file).
    #[error("failed to decrypt {path}: {message}")]
    DecryptFailed { path: String, message: String },

    /// Key generation or public key derivation failed.
    #[error("key generation failed: {message}")]
    KeygenFailed { message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Home directory could not be determined.
    #[error("cannot determine home directory; pass --root or set CLASSGIT_ROOT")]
    NoHomeDir,
}

// --- Process Errors ---

/// Errors starting or waiting for an external tool.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Destination already exists and overwriting was not requested.
    #[error("destination already exists: {0}")]
    AlreadyExists(String),

    /// Entries under a tree could not be read.
    #[error("could not read every entry under '{path}' ({count} failed)")]
    Unreadable { path: String, count: usize },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Workspace Errors ---

/// Workspace bootstrap errors.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A stored setting is missing.
    #[error("{what} is not configured (expected in {path})")]
    MissingSetting { what: String, path: String },

    /// The user entered nothing at a required prompt.
    #[error("{what} cannot be empty")]
    EmptyAnswer { what: String },

    /// Reading interactive input failed.
    #[error("failed to read input: {message}")]
    Prompt { message: String },
}
