// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   init, push, pull, status, add-device, config
//! no command --> menu::run_menu (same handlers, choices 1-5)
//! ```

pub mod config;
pub mod device;
pub mod init;
pub mod menu;
pub mod status;
pub mod sync;
