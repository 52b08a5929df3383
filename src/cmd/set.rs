// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Set motion.
//!
//! ```text
//! config = (all <- application) narrowed to application keys
//! write <dir>/<name>:  <global>.<var> = {...};
//! ```

use std::path::PathBuf;

use tracing::info;

use super::overlay;
use crate::cli::set::SetArgs;
use crate::config::Settings;
use crate::core::env::VariableMap;
use crate::core::env::source::{EnvironmentProvider, EnvironmentSource};
use crate::error::{ConfigError, MotionError, Result};
use crate::utility::fs::handler::{FileHandler, FileOps};

/// Validated parameters of a set run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetParams {
    pub dir: PathBuf,
    pub file_name: String,
    pub var_name: String,
}

impl TryFrom<&SetArgs> for SetParams {
    type Error = ConfigError;

    fn try_from(args: &SetArgs) -> std::result::Result<Self, Self::Error> {
        let missing = |name: &str| ConfigError::MissingArgument {
            name: name.to_string(),
        };
        if args.dir.as_os_str().is_empty() {
            return Err(missing("--dir"));
        }
        if args.name.trim().is_empty() {
            return Err(missing("--name"));
        }
        if args.var.trim().is_empty() {
            return Err(missing("--var"));
        }
        Ok(Self {
            dir: args.dir.clone(),
            file_name: args.name.clone(),
            var_name: args.var.clone(),
        })
    }
}

/// Writes the application variables into a standalone script.
pub struct SetMotion<E = EnvironmentSource, F = FileOps> {
    environment: E,
    files: F,
}

impl SetMotion {
    /// Creates the motion over the process environment and local filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be captured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            EnvironmentSource::from_process(settings, true)?,
            FileOps::new(settings),
        ))
    }
}

impl<E: EnvironmentProvider, F: FileHandler> SetMotion<E, F> {
    pub const fn new(environment: E, files: F) -> Self {
        Self { environment, files }
    }

    #[must_use]
    pub const fn files(&self) -> &F {
        &self.files
    }

    /// Variables written to the script.
    #[must_use]
    pub fn configuration(&self) -> VariableMap {
        let mut config = overlay(&self.environment);
        config.retain(|key, _| self.environment.is_application_key(key));
        config
    }

    /// Writes the script.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::WriteFailed` if the file cannot be written.
    pub async fn execute(&self, params: &SetParams) -> Result<()> {
        let config = self.configuration();
        let outcome = self
            .files
            .write_variable_file(&params.dir, &params.file_name, &config, &params.var_name)
            .await;

        if let Some(e) = outcome.error {
            return Err(MotionError::WriteFailed {
                path: outcome.path.display().to_string(),
                message: format!("{e:#}"),
            }
            .into());
        }

        info!(
            path = %outcome.path.display(),
            variables = config.len(),
            "created environment file"
        );
        Ok(())
    }
}

/// Handler for the `set` verb.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the file cannot be
/// written.
pub async fn run_set_command(args: &SetArgs, settings: &Settings) -> Result<()> {
    let params = SetParams::try_from(args)?;
    let settings = match &args.global {
        Some(global) => {
            let mut settings = settings.clone();
            settings.global_object.clone_from(global);
            settings.validate()?;
            settings
        }
        None => settings.clone(),
    };
    SetMotion::from_settings(&settings)?.execute(&params).await
}
