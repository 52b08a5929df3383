// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build motion.
//!
//! ```text
//! config  = dotenv ? all <- application : application
//! exposed = application keys of config - bypass
//! run "KEY=%%KEY ... <command>" with bypass keys set from config
//! ```

use tracing::{debug, info};

use super::overlay;
use crate::cli::build::BuildArgs;
use crate::config::{DEFAULT_PLACEHOLDER, Settings};
use crate::core::env::VariableMap;
use crate::core::env::source::{EnvironmentProvider, EnvironmentSource};
use crate::core::env::validate::{parse_boolean, parse_command};
use crate::core::process::command::{CommandExecutor, CommandRunner, format_environment_command};
use crate::error::{MotionError, Result, ValidationError};

/// Validated parameters of a build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildParams {
    pub command: String,
    pub dotenv: bool,
    pub bypass: Vec<String>,
}

impl TryFrom<&BuildArgs> for BuildParams {
    type Error = ValidationError;

    fn try_from(args: &BuildArgs) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            command: parse_command(&args.command)?,
            dotenv: parse_boolean(&args.dotenv)?,
            bypass: args.bypass.clone(),
        })
    }
}

/// Runs a build command with application variables exposed as placeholders.
pub struct BuildMotion<E = EnvironmentSource, R = CommandRunner> {
    environment: E,
    runner: R,
    placeholder: String,
}

impl BuildMotion {
    /// Creates the motion over the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be captured.
    pub fn from_settings(settings: &Settings, dotenv: bool) -> Result<Self> {
        Ok(Self::new(
            EnvironmentSource::from_process(settings, dotenv)?,
            CommandRunner::new(),
        )
        .with_placeholder(settings.placeholder.clone()))
    }
}

impl<E: EnvironmentProvider, R: CommandExecutor> BuildMotion<E, R> {
    pub fn new(environment: E, runner: R) -> Self {
        Self {
            environment,
            runner,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Variables visible to the build.
    #[must_use]
    pub fn configuration(&self, dotenv: bool) -> VariableMap {
        if dotenv {
            overlay(&self.environment)
        } else {
            self.environment.application_variables()
        }
    }

    /// Application variables baked into the build as placeholder tokens.
    #[must_use]
    pub fn exposed_variables(&self, config: &VariableMap, bypass: &[String]) -> VariableMap {
        config
            .iter()
            .filter(|(key, _)| self.environment.is_application_key(key))
            .filter(|(key, _)| !bypass.contains(key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Runs the build.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::BuildFailed` if the command cannot be spawned,
    /// exits non-zero, or writes to stderr.
    pub async fn execute(&self, params: &BuildParams) -> Result<()> {
        let config = self.configuration(params.dotenv);
        let exposed = self.exposed_variables(&config, &params.bypass);
        let command = format_environment_command(&exposed, &params.command, &self.placeholder);
        debug!(exposed = exposed.len(), bypass = ?params.bypass, "prepared build environment");

        let outcome = self.runner.run(&command, &config, &params.bypass).await;
        if let Some(e) = outcome.error {
            return Err(MotionError::BuildFailed {
                message: format!("{e:#}"),
            }
            .into());
        }

        info!(command = %params.command, "build command finished");
        Ok(())
    }
}

/// Handler for the `build` verb.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the build fails.
pub async fn run_build_command(args: &BuildArgs, settings: &Settings) -> Result<()> {
    let params = BuildParams::try_from(args)?;
    BuildMotion::from_settings(settings, params.dotenv)?
        .execute(&params)
        .await
}
