// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator prompts.
//!
//! ```text
//! Prompter
//!   DialoguerPrompter   terminal (dialoguer, ColorfulTheme)
//!   ScriptedPrompter    queued answers for non-interactive runs
//! ```

use crate::error::{ClassGitResult, WorkspaceError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of operator answers.
pub trait Prompter {
    /// Ask for a line of text. Returns the trimmed answer, which may be empty
    /// when there is no default.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Prompt` if input cannot be read.
    fn input(&self, prompt: &str, default: Option<&str>) -> ClassGitResult<String>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Prompt` if input cannot be read.
    fn confirm(&self, prompt: &str, default: bool) -> ClassGitResult<bool>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn prompt_error(e: &dialoguer::Error) -> WorkspaceError {
    WorkspaceError::Prompt {
        message: e.to_string(),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> ClassGitResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(|e| prompt_error(&e))?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> ClassGitResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(&e))?)
    }
}

/// Answers taken from a queue, in order.
///
/// An empty answer to `input` falls back to the default. Running out of
/// answers is reported as a prompt error, which ends an interactive loop.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .map(|asked| asked.clone())
            .unwrap_or_default()
    }

    /// Answers not yet consumed.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }

    fn next(&self, prompt: &str) -> ClassGitResult<String> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .ok_or_else(|| {
                WorkspaceError::Prompt {
                    message: format!("no scripted answer for '{prompt}'"),
                }
                .into()
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> ClassGitResult<String> {
        let answer = self.next(prompt)?.trim().to_string();
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> ClassGitResult<bool> {
        let answer = self.next(prompt)?.trim().to_ascii_lowercase();
        Ok(match answer.as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}
