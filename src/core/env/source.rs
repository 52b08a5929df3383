// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ambient variable sourcing and filtering.
//!
//! ```text
//! EnvironmentContext::from_process()      vars_os, non-Unicode value => undefined
//!   .with_dotenv(".env")                  file entries beneath process entries
//!   .with_defaults(settings.variables)    fallbacks beneath everything
//!        |
//!        v
//! EnvironmentSource::new(Some(ctx), policy)
//!   all_variables()          every defined entry
//!   application_variables()  prefix match || special key
//!   by_prefix(prefix)        prefix match only
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, trace};

use super::VariableMap;
use crate::config::Settings;
use crate::error::{ConfigError, Result};

/// Explicit snapshot of the ambient environment.
///
/// A `None` value marks a variable that is present but undefined (for
/// process variables, one whose value is not valid Unicode).
#[derive(Debug, Clone, Default)]
pub struct EnvironmentContext {
    vars: BTreeMap<String, Option<String>>,
}

impl EnvironmentContext {
    /// Captures the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                let value = value.into_string().ok();
                if value.is_none() {
                    trace!(key = %key, "environment value is not valid unicode");
                }
                Some((key, value))
            })
            .collect();
        Self { vars }
    }

    /// Builds a context from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }

    /// Layers a dotenv file beneath the entries already present.
    ///
    /// A missing file leaves the context unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` if the file exists but cannot be parsed.
    pub fn with_dotenv(mut self, path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!(path = %path.display(), "no dotenv file");
            return Ok(self);
        }

        let dotenv_error = |e: dotenvy::Error| ConfigError::Dotenv {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut loaded = 0usize;
        for item in dotenvy::from_path_iter(path).map_err(dotenv_error)? {
            let (key, value) = item.map_err(dotenv_error)?;
            self.vars.entry(key).or_insert_with(|| {
                loaded += 1;
                Some(value)
            });
        }
        debug!(path = %path.display(), loaded, "loaded dotenv file");
        Ok(self)
    }

    /// Layers fallback values beneath the entries already present.
    #[must_use]
    pub fn with_defaults(mut self, defaults: VariableMap) -> Self {
        for (key, value) in defaults {
            self.vars.entry(key).or_insert(Some(value));
        }
        self
    }

    /// Iterates over every entry, defined or not.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

/// Which keys count as application variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPolicy {
    prefixes: Vec<String>,
    special_keys: Vec<String>,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl KeyPolicy {
    #[must_use]
    pub const fn new(prefixes: Vec<String>, special_keys: Vec<String>) -> Self {
        Self {
            prefixes,
            special_keys,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.prefixes.clone(), settings.special_keys.clone())
    }

    /// True if `key` starts with a recognized prefix or is a special key.
    #[must_use]
    pub fn is_application_key(&self, key: &str) -> bool {
        self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
            || self.special_keys.iter().any(|s| s == key)
    }
}

/// Read access to the ambient variable set, as consumed by motions.
pub trait EnvironmentProvider: Send + Sync {
    /// Every variable with a defined value.
    fn all_variables(&self) -> VariableMap;

    /// Variables whose key is recognized by the application key policy.
    fn application_variables(&self) -> VariableMap;

    /// True if `key` would be part of [`Self::application_variables`].
    fn is_application_key(&self, key: &str) -> bool;
}

/// Filters an [`EnvironmentContext`] into immutable variable views.
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
    context: EnvironmentContext,
    policy: KeyPolicy,
}

impl EnvironmentSource {
    /// Creates a source over an explicit context.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvironmentUnavailable` when no context is given.
    pub fn new(
        context: Option<EnvironmentContext>,
        policy: KeyPolicy,
    ) -> std::result::Result<Self, ConfigError> {
        match context {
            Some(context) => Ok(Self { context, policy }),
            None => Err(ConfigError::EnvironmentUnavailable),
        }
    }

    /// Captures the process environment, optionally layering the dotenv file
    /// named in `settings` beneath it, with the `[variables]` fallbacks at
    /// the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the dotenv file exists but cannot be parsed, or
    /// if a fallback value is not a string.
    pub fn from_process(settings: &Settings, load_dotenv: bool) -> Result<Self> {
        let mut context = EnvironmentContext::from_process();
        if load_dotenv {
            context = context.with_dotenv(&settings.dotenv_path)?;
        }
        let context = context.with_defaults(settings.fallback_variables()?);
        Ok(Self::new(Some(context), KeyPolicy::from_settings(settings))?)
    }

    /// Variables whose key starts with `prefix`.
    #[must_use]
    pub fn by_prefix(&self, prefix: &str) -> VariableMap {
        self.collect_defined(|key| key.starts_with(prefix))
    }

    fn collect_defined(&self, keep: impl Fn(&str) -> bool) -> VariableMap {
        self.context
            .iter()
            .filter(|(key, _)| keep(key))
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
            .collect()
    }
}

impl EnvironmentProvider for EnvironmentSource {
    fn all_variables(&self) -> VariableMap {
        self.collect_defined(|_| true)
    }

    fn application_variables(&self) -> VariableMap {
        self.collect_defined(|key| self.policy.is_application_key(key))
    }

    fn is_application_key(&self, key: &str) -> bool {
        self.policy.is_application_key(key)
    }
}
