// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! dispatch(Command, Settings)
//!   Version --> print version
//!   Build   --> build::run_build_command   --> BuildMotion  --> CommandRunner
//!   Inject  --> inject::run_inject_command --> InjectMotion --> FileOps (copy, walk)
//!   Set     --> set::run_set_command       --> SetMotion    --> FileOps (write)
//! ```
//!
//! Motions are generic over their collaborators so tests can swap in fakes;
//! the default type parameters are the process environment and the local
//! filesystem.

pub mod build;
pub mod inject;
pub mod set;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use crate::config::Settings;
use crate::core::env::VariableMap;
use crate::core::env::source::EnvironmentProvider;
use crate::error::Result;

/// Every defined variable, with application variables taking precedence.
pub fn overlay(environment: &impl EnvironmentProvider) -> VariableMap {
    let mut config = environment.all_variables();
    config.extend(environment.application_variables());
    config
}

/// Routes a parsed verb to its handler.
///
/// # Errors
///
/// Returns the handler's error.
pub async fn dispatch(command: &Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Build(args) => build::run_build_command(args, settings).await,
        Command::Inject(args) => inject::run_inject_command(args, settings).await,
        Command::Set(args) => set::run_set_command(args, settings).await,
    }
}
