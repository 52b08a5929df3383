// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawning a [`ShellCommand`].
//!
//! ```text
//! run()
//!   to_command()    shell + line, cwd, env, stdio
//!   spawn()         failure --> ProcessError::SpawnFailed
//!   collect()       stream stdout/stderr
//!   exit != 0 && !ALLOW_FAILURE --> ProcessError::NonZeroExit
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{CommandOutput, RunFlags, ShellCommand, StreamFlags};
use crate::error::{ProcessError, Result};

impl ShellCommand {
    /// Runs the command to completion.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the shell cannot be started, or
    /// `ProcessError::NonZeroExit` on a failing exit code unless
    /// `ALLOW_FAILURE` is set.
    pub async fn run(self) -> Result<CommandOutput> {
        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(shell = %self.shell_program().display(), line = %self.line(), "exec");

        let mut child = self
            .to_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: self.line().to_string(),
                source,
            })?;
        trace!(label = %self.label_str(), pid = ?child.id(), "spawned");

        let output = self.collect(&mut child).await?;

        if !output.success() && !self.run_flags().contains(RunFlags::ALLOW_FAILURE) {
            if !output.stderr().is_empty() {
                error!(label = %self.label_str(), stderr = %output.stderr(), "command error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: self.line().to_string(),
                code: output.exit_code(),
            }
            .into());
        }

        trace!(label = %self.label_str(), exit_code = output.exit_code(), "finished");
        Ok(output)
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(self.shell_program());
        command.args(self.shell_args()).arg(self.line());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        if let Some(env) = self.environment() {
            command.env_clear().envs(env.iter());
        }

        command
            .stdin(Stdio::null())
            .stdout(stdio(self.stdout_flags()))
            .stderr(stdio(self.stderr_flags()))
            .kill_on_drop(true);
        command
    }
}

fn stdio(flags: StreamFlags) -> Stdio {
    if flags.contains(StreamFlags::INHERIT) {
        Stdio::inherit()
    } else if flags.is_piped() {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}
