// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder for the external tools (`git`, `age`, `age-keygen`).
//!
//! ```text
//! ProcessBuilder
//!  • new / exists / find           tool lookup, cached per program
//!  • arg/args/cwd/env/flag/name
//!  • capture_stderr/capture_output, inherit_stdio
//!
//! ProcessFlags: ALLOW_FAILURE
//! StreamFlags:  FORWARD_TO_LOG (default), KEEP_IN_STRING, INHERIT
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};

/// Tool paths already resolved through `PATH`.
static TOOL_PATHS: OnceLock<RwLock<BTreeMap<OsString, PathBuf>>> = OnceLock::new();

fn tool_paths() -> &'static RwLock<BTreeMap<OsString, PathBuf>> {
    TOOL_PATHS.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling how a finished process is judged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Return the output even when the exit code is non-zero; the
        /// caller inspects `ProcessOutput::success`.
        const ALLOW_FAILURE = 0x01;
    }
}

bitflags! {
    /// Where stdout or stderr of a child goes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Each line is logged at trace level.
        const FORWARD_TO_LOG = 0x01;
        /// Lines are collected into `ProcessOutput`.
        const KEEP_IN_STRING = 0x02;
        /// Shared with the terminal (git status, credential prompts).
        const INHERIT = 0x04;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Exit code; -1 when the process was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Captured stdout, empty unless `KEEP_IN_STRING` was set.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured stderr, empty unless `KEEP_IN_STRING` was set.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// What to tell the user about a failed run: the tool's own stderr, or
    /// the exit code when it printed nothing.
    #[must_use]
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            format!("exited with code {}", self.exit_code)
        } else {
            stderr.to_string()
        }
    }
}

/// Builder for configuring and running one external tool invocation.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    /// Added on top of the inherited environment.
    env: Vec<(OsString, OsString)>,
    flags: ProcessFlags,
    stdout: StreamFlags,
    stderr: StreamFlags,
    /// Shown in logs instead of the program's file stem.
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a builder for `program`, which may be a bare name looked up
    /// on `PATH` or a path to the executable.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            flags: ProcessFlags::empty(),
            stdout: StreamFlags::FORWARD_TO_LOG,
            stderr: StreamFlags::FORWARD_TO_LOG,
            name: None,
        }
    }

    /// Whether `program` can be started, either as a path or through `PATH`.
    #[must_use]
    pub fn exists(program: impl AsRef<OsStr>) -> bool {
        Self::find(program).is_some()
    }

    /// Resolve `program` to the executable that would run.
    ///
    /// Successful lookups are cached for the life of the process.
    #[must_use]
    pub fn find(program: impl AsRef<OsStr>) -> Option<PathBuf> {
        let program = program.as_ref();
        if let Some(path) = tool_paths()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(program)
        {
            return Some(path.clone());
        }

        let path = which::which(program).ok()?;
        tool_paths()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(program.to_os_string(), path.clone());
        Some(path)
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Keep stderr for error messages; stdout is still logged.
    #[must_use]
    pub const fn capture_stderr(mut self) -> Self {
        self.stderr = StreamFlags::KEEP_IN_STRING;
        self
    }

    /// Keep both streams.
    #[must_use]
    pub const fn capture_output(mut self) -> Self {
        self.stdout = StreamFlags::KEEP_IN_STRING;
        self.stderr = StreamFlags::KEEP_IN_STRING;
        self
    }

    /// Share the terminal with the child, stdin included.
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.stdout = StreamFlags::INHERIT;
        self.stderr = StreamFlags::INHERIT;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub(super) fn env_vars(&self) -> &[(OsString, OsString)] {
        &self.env
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) const fn stdout_flags(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_flags(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
