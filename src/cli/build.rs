// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command arguments.
//!
//! ```text
//! dynamic-env build [--dotenv true|false] [--bypass NAME]... [--] <command>...
//!
//! exposed to the command as KEY=%%KEY : application keys - bypass keys
//! real values in the child env        : bypass keys
//! ```

use clap::{ArgAction, Args};

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Reads the .env file into the environment before building ("true" or "false").
    #[arg(long, value_name = "BOOL", default_value = "true")]
    pub dotenv: String,

    /// Variable handed to the build with its real value instead of a placeholder.
    /// Can be specified multiple times.
    #[arg(long, value_name = "ENV_VARIABLE_NAME", action = ArgAction::Append)]
    pub bypass: Vec<String>,

    /// Build command, e.g. `npm run build`.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub command: Vec<String>,
}
