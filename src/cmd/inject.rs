// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Inject motion.
//!
//! ```text
//! config = all <- application
//! output given?  copy dir -> output, target = output
//!                else target = dir
//! rewrite every file under target, fail listing every failed path
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use super::overlay;
use crate::cli::inject::InjectArgs;
use crate::config::Settings;
use crate::core::env::source::{EnvironmentProvider, EnvironmentSource};
use crate::error::{ConfigError, MotionError, Result};
use crate::utility::fs::handler::{FileHandler, FileOps};

/// Validated parameters of an inject run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectParams {
    pub dir: PathBuf,
    pub output: Option<PathBuf>,
}

impl TryFrom<&InjectArgs> for InjectParams {
    type Error = ConfigError;

    fn try_from(args: &InjectArgs) -> std::result::Result<Self, Self::Error> {
        if args.dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingArgument {
                name: "--dir".to_string(),
            });
        }
        Ok(Self {
            dir: args.dir.clone(),
            output: args.output.clone(),
        })
    }
}

/// Rewrites placeholder tokens in a build folder, optionally on a copy.
pub struct InjectMotion<E = EnvironmentSource, F = FileOps> {
    environment: E,
    files: F,
}

impl InjectMotion {
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

impl<E: EnvironmentProvider, F: FileHandler> InjectMotion<E, F> {
    pub const fn new(environment: E, files: F) -> Self {
        Self { environment, files }
    }

    #[must_use]
    pub const fn files(&self) -> &F {
        &self.files
    }

    /// Copies into the output folder when one is given.
    async fn prepare_target<'a>(&self, params: &'a InjectParams) -> Result<&'a Path> {
        let Some(output) = &params.output else {
            return Ok(params.dir.as_path());
        };

        let outcome = self.files.copy_folder(&params.dir, output).await;
        if let Some(e) = outcome.error {
            return Err(MotionError::CopyFailed {
                destination: output.display().to_string(),
                message: format!("{e:#}"),
            }
            .into());
        }
        Ok(output.as_path())
    }

    /// Runs the injection.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::CopyFailed` if the copy fails, or
    /// `MotionError::FilesFailed` listing every file that could not be
    /// rewritten. Files that succeeded stay rewritten.
    pub async fn execute(&self, params: &InjectParams) -> Result<()> {
        let target = self.prepare_target(params).await?;
        let config = overlay(&self.environment);

        let outcomes = self.files.replace_files_in_directory(target, &config).await;
        let failed: Vec<String> = outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.path.display().to_string())
            .collect();
        if !failed.is_empty() {
            for outcome in outcomes.iter().filter(|o| !o.success) {
                tracing::error!("{outcome}");
            }
            return Err(MotionError::FilesFailed { paths: failed }.into());
        }

        info!(
            target = %target.display(),
            files = outcomes.len(),
            "injected environment variables"
        );
        Ok(())
    }
}

/// Handler for the `inject` verb.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the injection fails.
pub async fn run_inject_command(args: &InjectArgs, settings: &Settings) -> Result<()> {
    let params = InjectParams::try_from(args)?;
    InjectMotion::from_settings(settings)?.execute(&params).await
}
