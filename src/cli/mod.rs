// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line surface.
//!
//! ```text
//! dynamic-env [global options] <command>
//! version
//! build  [--dotenv true|false] [--bypass NAME]... <command>...
//! inject -d <dir> [-o <output>]
//! set    [-d <dir>] [-n <file>] [-v <var>] [--global <object>]
//! ```

pub mod build;
pub mod global;
pub mod inject;
pub mod set;


use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::inject::InjectArgs;
use crate::cli::set::SetArgs;
use clap::{Parser, Subcommand};

/// Runtime environment injection for static web builds.
#[derive(Debug, Parser)]
#[command(
    name = "dynamic-env",
    author,
    version,
    about = "Inject runtime environment variables into static web builds",
    long_about = "dynamic-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Build once with placeholder tokens, then fill in real values\n\
                  per deployment. `dynamic-env build npm run build` bakes\n\
                  `%%VITE_*` tokens into the output, `dynamic-env inject -d build`\n\
                  replaces them, and `dynamic-env set` writes a standalone\n\
                  `window.env` script instead.",
    after_help = "SETTINGS:\n\n\
                  dynamic-env reads `dynamic-env.toml` from the current directory\n\
                  if present, then every file given with --config, then\n\
                  DYNAMIC_ENV__* environment variables (e.g.\n\
                  DYNAMIC_ENV__PLACEHOLDER=@@). Use --no-default-config to skip\n\
                  `dynamic-env.toml`."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The verbs, each mapped to a motion by `cmd::dispatch`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the version.
    Version,

    /// Runs a build command with placeholder tokens exposed as variables.
    Build(BuildArgs),

    /// Replaces placeholder tokens in a build folder with real values.
    Inject(InjectArgs),

    /// Writes the application variables into a script in a build folder.
    Set(SetArgs),
}

/// Parses `std::env::args`, exiting with usage on error.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
