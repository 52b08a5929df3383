// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentContext  explicit snapshot of process env (+ .env, fallbacks)
//!        |
//!        v
//! EnvironmentSource   all / application / by_prefix views
//!        |                   (immutable VariableMap snapshots)
//!        v
//! motions ----------> Env (child process environment, current_env())
//! ```
//!
//! - **Explicit input**: nothing reads `std::env` except
//!   [`EnvironmentContext::from_process`] and [`current_env`]
//! - **Snapshots**: every view is an owned copy taken at query time

pub mod container;
pub mod source;
pub mod validate;


use std::collections::BTreeMap;

/// Mapping from variable name to value.
///
/// Ordered so that pattern generation and generated files are deterministic.
pub type VariableMap = BTreeMap<String, String>;

/// Captures the current process environment for a child process.
///
/// Entries that are not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
