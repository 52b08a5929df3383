// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Set command arguments.
//!
//! ```text
//! dynamic-env set -d ./build -n env.js -v env
//!   --> ./build/env.js:  window.env = { ... };
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Build folder the variable file is written into.
    #[arg(short = 'd', long, value_name = "PATH_TO_BUILD_FOLDER", default_value = "./build")]
    pub dir: PathBuf,

    /// File name of the generated script.
    #[arg(short = 'n', long, value_name = "NAME_OF_ENV_FILE", default_value = "env.js")]
    pub name: String,

    /// Property assigned on the global object.
    #[arg(short = 'v', long = "var", value_name = "VAR_NAME", default_value = "env")]
    pub var: String,

    /// Global object to assign onto, overriding the configured one.
    #[arg(long, value_name = "OBJECT")]
    pub global: Option<String>,
}

impl Default for SetArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./build"),
            name: "env.js".to_string(),
            var: "env".to_string(),
            global: None,
        }
    }
}
