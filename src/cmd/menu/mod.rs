// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive menu shown when no command is given.
//!
//! ```text
//! loop:
//!   print menu --> read choice --> 1 push | 2 pull | 3 add device | 4 status | 5 quit
//!   action error: print "Error: ..." and show the menu again
//!   unreadable input (EOF): stop with that error
//! ```


use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::workspace::Workspace;
use crate::workspace::prompt::Prompter;

use super::device::run_add_device_interactive;
use super::status::run_status_command;
use super::sync::{run_pull_command, run_push_command};

/// Prompt for a menu choice.
pub const CHOICE_PROMPT: &str = "Select an option";

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Push,
    Pull,
    AddDevice,
    Status,
    Quit,
}

impl MenuChoice {
    pub const ALL: [Self; 5] = [
        Self::Push,
        Self::Pull,
        Self::AddDevice,
        Self::Status,
        Self::Quit,
    ];

    /// Parse `1`-`5`, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Push),
            "2" => Some(Self::Pull),
            "3" => Some(Self::AddDevice),
            "4" => Some(Self::Status),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Push => 1,
            Self::Pull => 2,
            Self::AddDevice => 3,
            Self::Status => 4,
            Self::Quit => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Push => "Push courses",
            Self::Pull => "Pull courses",
            Self::AddDevice => "Add a new device",
            Self::Status => "Show Git status",
            Self::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// The menu as printed before every choice.
#[must_use]
pub fn menu_text() -> String {
    let mut lines = vec!["ClassGit Menu".to_string()];
    lines.extend(MenuChoice::ALL.iter().map(ToString::to_string));
    lines.join("\n")
}

/// Run the menu until the operator quits.
///
/// # Errors
///
/// Returns an error only when the choice itself cannot be read.
pub async fn run_menu(workspace: &Workspace, config: &Config, prompter: &dyn Prompter) -> Result<()> {
    loop {
        println!("\n{}\n", menu_text());
        let answer = prompter.input(CHOICE_PROMPT, None)?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            println!("Invalid option, try again.");
            continue;
        };
        if choice == MenuChoice::Quit {
            return Ok(());
        }
        if let Err(e) = run_choice(choice, workspace, config, prompter).await {
            eprintln!("Error: {e:#}");
        }
    }
}

async fn run_choice(
    choice: MenuChoice,
    workspace: &Workspace,
    config: &Config,
    prompter: &dyn Prompter,
) -> Result<()> {
    match choice {
        MenuChoice::Push => run_push_command(workspace, config, prompter).await,
        MenuChoice::Pull => run_pull_command(workspace, config).await,
        MenuChoice::AddDevice => run_add_device_interactive(workspace, prompter).await,
        MenuChoice::Status => run_status_command(workspace, config).await,
        MenuChoice::Quit => Ok(()),
    }
}
