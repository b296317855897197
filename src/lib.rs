// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          init / push / pull / menu
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   workspace   +  config   |
//!              |  layout, bootstrap, TOML  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               sync        device    git
//!            push/pull    key export  gix/CLI
//!                 |
//!                 v
//!                age
//!          age / age-keygen
//!
//!   +-----------------------------------------+
//!   |  core   process (tokio subprocesses)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod age;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod device;
pub mod error;
pub mod git;
pub mod logging;
pub mod sync;
pub mod utility;
pub mod workspace;
