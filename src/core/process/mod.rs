// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and the build command runner.
//!
//! ```text
//! ShellCommand::new("npm run build")
//!   .env() .cwd() .stdout() .stderr()
//!   .run()
//!       --> /bin/sh -c <line>   (pwsh -Command on Windows)
//!           stream stdout/stderr
//!       --> CommandOutput { exit_code, stdout, stderr }
//!
//! CommandRunner  (CommandExecutor)
//!   bypass keys --> child env, outcome per run
//! ```

pub mod builder;
pub mod command;
mod io;
mod runner;
