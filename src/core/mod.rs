// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   ProcessBuilder --> tokio::process
//!   ProcessOutput      (git, age, age-keygen)
//! ```

pub mod process;
