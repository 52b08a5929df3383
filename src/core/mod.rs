// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment capture and process execution.
//!
//! ```text
//!            core
//!             |
//!       +-----+------+
//!       |            |
//!       v            v
//!      env        process
//!       |            |
//!  EnvironmentSource ShellCommand
//!  KeyPolicy         CommandRunner
//!  validate_*        format_environment_command
//! ```

pub mod env;
pub mod process;
