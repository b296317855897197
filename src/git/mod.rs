// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations on the encrypted mirror.
//!
//! ```text
//!          Public API
//!   query.rs   cmd.rs   remote.rs
//!       |        |          |
//!       v        v          |
//!   ,------------------,    |
//!   | backend (traits) |    |
//!   '--+----------+----'    |
//!      |          |         v
//!      v          v      ProcessBuilder
//!  GitQuery   GitMutation  (async, inherited tty)
//! (gix, read) (CLI, write)  fetch / push
//!      |          |         status
//!      v          v
//!  GixBackend ShellBackend
//!  .is_repo   .init / .symbolic-ref
//!  .branch    .add / .rm --cached
//!  .remote_ref .commit
//!  .tracked   .checkout -B / reset / clean
//!  .merging
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for local writes, never prompts.
//! **`remote`**: network commands that may ask for credentials.

pub mod backend;
pub mod cmd;
pub mod query;
pub mod remote;

#[cfg(test)]
mod tests;
