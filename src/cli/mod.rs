// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for classgit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! classgit [global options] [command]
//! (none)        interactive menu
//! init [--remote URL] [--public-key KEY]
//! push
//! pull
//! status
//! add-device <DEST> [--force]
//! config [--json]
//! version
//! ```

pub mod device;
pub mod global;
pub mod init;
pub mod options;

#[cfg(test)]
mod tests;

use crate::cli::device::AddDeviceArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::init::InitArgs;
use crate::cli::options::ConfigArgs;
use clap::{Parser, Subcommand};

/// Encrypted course sync over Git.
#[derive(Debug, Parser)]
#[command(
    name = "classgit",
    author,
    version,
    about = "Encrypted course sync over Git",
    long_about = "classgit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps course files in ~/ClassGit/courses in plaintext and\n\
                  publishes only age-encrypted copies to a Git remote.\n\n\
                  Run `classgit` without a command for the interactive menu, or\n\
                  see `classgit <command> --help` for a single operation.",
    after_help = "WORKSPACE:\n\n\
                  config/age_key.txt     private key, never pushed\n\
                  config/repo_url.txt    remote repository URL\n\
                  config/public_key.txt  age public key files are encrypted to\n\
                  config/classgit.toml   optional settings\n\
                  courses/               plaintext course files\n\
                  encrypted/             git mirror holding <file>.age"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Creates the workspace, key and encrypted mirror.
    Init(InitArgs),

    /// Encrypts courses and pushes them.
    Push,

    /// Pulls encrypted courses and decrypts them.
    Pull,

    /// Shows git status of the encrypted mirror.
    Status,

    /// Copies the private key for another device.
    #[command(name = "add-device")]
    AddDevice(AddDeviceArgs),

    /// Lists resolved options and the config files they came from.
    Config(ConfigArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
