// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command description.
//!
//! ```text
//! ShellCommand::new("npm run build")
//!   .shell()   override interpreter (default /bin/sh -c, pwsh -Command)
//!   .cwd()     working directory
//!   .env()     full child environment
//!   .stdout() / .stderr()   StreamFlags
//!   .flags()   RunFlags
//! ```

use bitflags::bitflags;
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;

#[cfg(windows)]
const DEFAULT_SHELL: (&str, &[&str]) = ("pwsh", &["-NoProfile", "-NonInteractive", "-Command"]);
#[cfg(not(windows))]
const DEFAULT_SHELL: (&str, &[&str]) = ("/bin/sh", &["-c"]);

bitflags! {
    /// How a finished command is judged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RunFlags: u8 {
        /// Return the output even when the exit code is non-zero
        const ALLOW_FAILURE = 1 << 0;
    }
}

bitflags! {
    /// Where a child's stdout or stderr goes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u8 {
        /// Emit each line as a trace event
        const FORWARD_TO_LOG = 1 << 0;
        /// Collect lines into the command output
        const KEEP_IN_STRING = 1 << 1;
        /// Share the parent's stream
        const INHERIT = 1 << 2;
        /// Drop everything
        const BIT_BUCKET = 1 << 3;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

impl StreamFlags {
    pub(super) const fn is_piped(self) -> bool {
        !self.contains(Self::INHERIT) && !self.contains(Self::BIT_BUCKET)
    }
}

/// What a finished command left behind.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    pub(super) const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Exit code, or -1 when the child was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Captured stdout, byte for byte with invalid UTF-8 replaced; empty
    /// unless `KEEP_IN_STRING` was set.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured stderr, byte for byte with invalid UTF-8 replaced; empty
    /// unless `KEEP_IN_STRING` was set.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A command line handed to the platform shell.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    line: String,
    shell: PathBuf,
    shell_args: Vec<String>,
    cwd: Option<PathBuf>,
    env: Option<Env>,
    flags: RunFlags,
    stdout: StreamFlags,
    stderr: StreamFlags,
    label: String,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        let (shell, shell_args) = DEFAULT_SHELL;
        Self {
            line: line.into(),
            shell: PathBuf::from(shell),
            shell_args: shell_args.iter().map(ToString::to_string).collect(),
            cwd: None,
            env: None,
            flags: RunFlags::empty(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            label: "command".to_string(),
        }
    }

    /// Runs the line through `program args... <line>` instead of the
    /// platform shell.
    #[must_use]
    pub fn shell<I, S>(mut self, program: impl AsRef<Path>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shell = program.as_ref().to_path_buf();
        self.shell_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replaces the child environment; the parent's is inherited otherwise.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: RunFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub const fn stdout(mut self, flags: StreamFlags) -> Self {
        self.stdout = flags;
        self
    }

    #[must_use]
    pub const fn stderr(mut self, flags: StreamFlags) -> Self {
        self.stderr = flags;
        self
    }

    /// Name used in log events.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    pub(super) fn shell_program(&self) -> &Path {
        &self.shell
    }

    pub(super) fn shell_args(&self) -> &[String] {
        &self.shell_args
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    pub(super) const fn run_flags(&self) -> RunFlags {
        self.flags
    }

    pub(super) const fn stdout_flags(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_flags(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn label_str(&self) -> &str {
        &self.label
    }
}
