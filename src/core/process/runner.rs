// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()
//! args, cwd, env, stdio
//!   |
//!   v
//! spawn() --> run_child()
//!   |
//!   v
//! exit_code == 0?
//! (not checked with ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use crate::error::{ProcessError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};

impl ProcessBuilder {
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(crate) fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` when the tool is missing,
    /// `ProcessError::NonZeroExit` on failure unless `ALLOW_FAILURE` is set,
    /// or an I/O error while waiting.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProcessError::ExecutableNotFound {
                    name: self.program().display().to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                }
            }
        })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child).await?;

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.env_vars() {
            command.env(key, value);
        }

        // Interactive git prompts (credentials) need the terminal.
        if self.stdout_flags().contains(StreamFlags::INHERIT) {
            command.stdin(Stdio::inherit());
        } else {
            command.stdin(Stdio::null());
        }

        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));

        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::piped()
        }
    }
}
