// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

use crate::workspace::BootstrapOptions;

/// Arguments for `init`.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Git URL of the encrypted repository (prompted when missing).
    #[arg(long = "remote", value_name = "URL")]
    pub remote: Option<String>,

    /// age public key to encrypt courses to (prompted when missing).
    #[arg(long = "public-key", value_name = "KEY")]
    pub public_key: Option<String>,
}

impl InitArgs {
    #[must_use]
    pub fn to_bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions::builder()
            .maybe_with_remote_url(self.remote.clone())
            .maybe_with_public_key(self.public_key.clone())
            .build()
    }
}
