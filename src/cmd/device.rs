// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key export for a new device, from `add-device` or the menu.

use crate::cli::device::AddDeviceArgs;
use crate::device::export_key;
use crate::error::{Result, WorkspaceError};
use crate::workspace::Workspace;
use crate::workspace::prompt::Prompter;
use std::path::{Path, PathBuf};

/// Prompt for the export destination.
pub const DESTINATION_PROMPT: &str = "Enter full path to copy your age key for a new device";

/// Run `add-device <DEST> [--force]`.
///
/// # Errors
///
/// Returns an error if the key is missing or the copy fails.
pub async fn run_add_device_command(args: &AddDeviceArgs, workspace: &Workspace) -> Result<()> {
    let destination = expand_home(&args.destination);
    export_key(workspace, &destination, args.force).await?;
    println!("Key copied to {}", destination.display());
    Ok(())
}

/// Ask for a destination, confirm before replacing an existing file, then copy.
///
/// # Errors
///
/// Returns an error on an empty answer, a missing key or a failed copy.
pub async fn run_add_device_interactive(workspace: &Workspace, prompter: &dyn Prompter) -> Result<()> {
    let answer = prompter.input(DESTINATION_PROMPT, None)?;
    if answer.is_empty() {
        return Err(WorkspaceError::EmptyAnswer {
            what: "destination path".to_string(),
        }
        .into());
    }
    let destination = expand_home(Path::new(&answer));

    let overwrite = destination.is_file();
    if overwrite
        && !prompter.confirm(
            &format!("{} exists. Overwrite?", destination.display()),
            false,
        )?
    {
        println!("Key not copied.");
        return Ok(());
    }

    export_key(workspace, &destination, overwrite).await?;
    println!("Key copied to {}", destination.display());
    Ok(())
}

/// Replace a leading `~` with the home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
