// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `classgit config`: show resolved options.

use crate::cli::options::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use anyhow::Context;

/// Display the resolved configuration and the sources it was merged from.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn run_config_command(args: &ConfigArgs, config: &Config, sources: &[String]) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    for line in config.format_options() {
        println!("{line}");
    }
    println!();
    if sources.is_empty() {
        println!("Built-in defaults only");
    } else {
        println!("Sources, lowest priority first:");
        for line in sources {
            println!("  {line}");
        }
    }
    Ok(())
}
