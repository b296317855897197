// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Workspace --> Config --> Logging --> Command Dispatch
//!   (none) bootstrap + menu | Init | Push | Pull | Status | AddDevice | Config
//! ```

use std::process::ExitCode;

use classgit::cli::global::GlobalOptions;
use classgit::cli::{self, Command};
use classgit::cmd::config::run_config_command;
use classgit::cmd::device::run_add_device_command;
use classgit::cmd::init::run_init_command;
use classgit::cmd::menu::run_menu;
use classgit::cmd::status::run_status_command;
use classgit::cmd::sync::{run_pull_command, run_push_command};
use classgit::config::Config;
use classgit::config::loader::ConfigLoader;
use classgit::error::Result;
use classgit::logging::{LogConfig, LogGuard, init_logging};
use classgit::workspace::prompt::DialoguerPrompter;
use classgit::workspace::{BootstrapOptions, Workspace};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let workspace = match Workspace::resolve(cli.global.root.as_deref()) {
        Ok(workspace) => workspace,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let loader = match build_config_loader(&cli.global, &workspace) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let sources = loader.format_sources();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging_from_config(&config, &workspace) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = dispatch_command(&cli, &workspace, &config, &sources).await;
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(
    cli: &cli::Cli,
    workspace: &Workspace,
    config: &Config,
    sources: &[String],
) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Init(args)) => run_init_command(args, workspace, config, &prompter).await,
        Some(Command::Push) => run_push_command(workspace, config, &prompter).await,
        Some(Command::Pull) => run_pull_command(workspace, config).await,
        Some(Command::Status) => run_status_command(workspace, config).await,
        Some(Command::AddDevice(args)) => run_add_device_command(args, workspace).await,
        Some(Command::Config(args)) => run_config_command(args, config, sources),
        None => {
            workspace
                .bootstrap(config, &prompter, &BootstrapOptions::default())
                .await?;
            run_menu(workspace, config, &prompter).await
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions, workspace: &Workspace) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(workspace.settings_file());
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("CLASSGIT");
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn init_logging_from_config(config: &Config, workspace: &Workspace) -> Result<LogGuard> {
    init_logging(&LogConfig::from_global(&config.global, workspace.root()))
}
