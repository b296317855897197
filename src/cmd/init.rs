// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::init::InitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::workspace::Workspace;
use crate::workspace::prompt::Prompter;

/// Set up the workspace and print where it lives.
///
/// # Errors
///
/// Returns an error if bootstrapping fails.
pub async fn run_init_command(
    args: &InitArgs,
    workspace: &Workspace,
    config: &Config,
    prompter: &dyn Prompter,
) -> Result<()> {
    let settings = workspace
        .bootstrap(config, prompter, &args.to_bootstrap_options())
        .await?;
    println!("Workspace ready at {}", workspace.root().display());
    println!("Remote:     {}", settings.remote_url);
    println!("Public key: {}", settings.recipient);
    Ok(())
}
