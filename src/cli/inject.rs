// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Inject command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `inject` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InjectArgs {
    /// Build folder whose files contain placeholders.
    #[arg(short = 'd', long, value_name = "PATH_TO_BUILD_FOLDER")]
    pub dir: PathBuf,

    /// Copies the build folder here first and rewrites the copy instead.
    #[arg(short = 'o', long, value_name = "PATH_TO_OUTPUT_FOLDER")]
    pub output: Option<PathBuf>,
}
