// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child process environment.
//!
//! ```text
//! Env: folded key --> (name as given, value)
//! folding is ASCII upper-case on Windows (PATH == Path), identity elsewhere
//! ```

use std::collections::BTreeMap;

#[cfg(windows)]
fn fold(key: &str) -> String {
    key.to_ascii_uppercase()
}

#[cfg(not(windows))]
fn fold(key: &str) -> String {
    key.to_string()
}

/// Variables handed to a child process.
///
/// Setting a key that folds to an existing one replaces both its value and
/// its spelling.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<String, (String, String)>,
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        self.vars.insert(fold(&key), (key, value.into()));
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&fold(key)).map(|(_, value)| value.as_str())
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&fold(key));
        self
    }

    /// Entries in folded-key order, with their original spelling.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .values()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
