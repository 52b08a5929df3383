// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command execution for the build motion.
//!
//! ```text
//! format_environment_command(exposed, "npm run build", "%%")
//!   --> "VITE_A=%%VITE_A PUBLIC_URL=%%PUBLIC_URL npm run build"
//!
//! CommandRunner::run(command, config, bypass_keys)
//!   child env = current env + { k: config[k] | k in bypass_keys }
//!   stdout inherited, stderr captured
//!   exit != 0 or stderr non-empty  --> failed outcome
//! ```

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info, warn};

use super::builder::{RunFlags, ShellCommand, StreamFlags};
use crate::core::env::VariableMap;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::ProcessError;
use crate::utility::fs::outcome::FileOperationOutcome;

/// Renders `KEY=<placeholder>KEY` assignments separated by spaces.
///
/// Keys that are not shell identifiers (`[A-Za-z_][A-Za-z0-9_]*`) are
/// skipped with a warning.
#[must_use]
pub fn format_environment<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    placeholder: &str,
) -> String {
    keys.into_iter()
        .filter(|key| {
            let valid = is_shell_identifier(key);
            if !valid {
                warn!(key = %key, "not a shell identifier, not exposed to the build");
            }
            valid
        })
        .map(|key| format!("{key}={placeholder}{key}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_shell_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Prefixes `command` with placeholder assignments for every key in
/// `exposed`, so the build bakes tokens instead of real values.
#[must_use]
pub fn format_environment_command(
    exposed: &VariableMap,
    command: &str,
    placeholder: &str,
) -> String {
    let assignments = format_environment(exposed.keys().map(String::as_str), placeholder);
    format!("{assignments} {command}").trim().to_string()
}

/// Runs a build command and reports the result as an outcome.
pub trait CommandExecutor: Send + Sync {
    /// Runs `command` with every key of `bypass_keys` found in `config`
    /// added to the child environment with its real value.
    fn run<'a>(
        &'a self,
        command: &'a str,
        config: &'a VariableMap,
        bypass_keys: &'a [String],
    ) -> BoxFuture<'a, FileOperationOutcome>;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    cwd: Option<PathBuf>,
    base_env: Option<Env>,
}

impl CommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs commands in `dir` instead of the current directory.
    #[must_use]
    pub fn with_cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Starts children from `env` instead of the current process environment.
    #[must_use]
    pub fn with_base_env(mut self, env: Env) -> Self {
        self.base_env = Some(env);
        self
    }

    /// Environment handed to the child.
    #[must_use]
    pub fn child_env(&self, config: &VariableMap, bypass_keys: &[String]) -> Env {
        let mut env = self.base_env.clone().unwrap_or_else(current_env);
        for key in bypass_keys {
            match config.get(key) {
                Some(value) => {
                    env.set(key, value);
                }
                None => debug!(key = %key, "bypass key not set, skipping"),
            }
        }
        env
    }

    fn location(&self) -> PathBuf {
        self.cwd
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl CommandExecutor for CommandRunner {
    fn run<'a>(
        &'a self,
        command: &'a str,
        config: &'a VariableMap,
        bypass_keys: &'a [String],
    ) -> BoxFuture<'a, FileOperationOutcome> {
        Box::pin(async move {
            let location = self.location();
            info!(command = %command, "running build command");

            let mut shell = ShellCommand::new(command)
                .label("build")
                .env(self.child_env(config, bypass_keys))
                .flags(RunFlags::ALLOW_FAILURE)
                .stdout(StreamFlags::INHERIT)
                .stderr(StreamFlags::KEEP_IN_STRING | StreamFlags::FORWARD_TO_LOG);
            if let Some(cwd) = &self.cwd {
                shell = shell.cwd(cwd);
            }

            let output = match shell.run().await {
                Ok(output) => output,
                Err(e) => return FileOperationOutcome::failed(location, e),
            };

            if !output.success() {
                warn!(code = output.exit_code(), stderr = %output.stderr(), "build command failed");
                return FileOperationOutcome::failed(
                    location,
                    ProcessError::NonZeroExit {
                        command: command.to_string(),
                        code: output.exit_code(),
                    },
                );
            }
            if !output.stderr().is_empty() {
                warn!(stderr = %output.stderr().trim_end(), "build command wrote to stderr");
                return FileOperationOutcome::failed(
                    location,
                    ProcessError::StderrOutput {
                        command: command.to_string(),
                        stderr: output.stderr().trim_end().to_string(),
                    },
                );
            }

            FileOperationOutcome::succeeded(location)
        })
    }
}
