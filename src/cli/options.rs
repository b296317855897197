// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

/// Arguments for `config`.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Print the resolved configuration as JSON.
    #[arg(long)]
    pub json: bool,
}
