// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;
use std::path::PathBuf;

/// Arguments for `add-device`.
#[derive(Debug, Clone, Args)]
pub struct AddDeviceArgs {
    /// Where to write the copy of the private key.
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Replace an existing file at DEST.
    #[arg(short, long)]
    pub force: bool,
}
