// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the injection motions.
//!
//! # Sources
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dynamic-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. DYNAMIC_ENV__* env vars
//! ```
//!
//! # Overrides
//!
//! ```text
//! DYNAMIC_ENV__PLACEHOLDER=@@       → placeholder = "@@"
//! DYNAMIC_ENV__GLOBAL_OBJECT=self   → global_object = "self"
//! DYNAMIC_ENV__DOTENV_PATH=.env.ci  → dotenv_path = ".env.ci"
//! ```
//!
//! # Example
//!
//! ```toml
//! placeholder = "%%"
//! prefixes = ["REACT_APP_", "VITE_", "NEXT_PUBLIC_"]
//! special_keys = ["PUBLIC_URL"]
//! global_object = "window"
//!
//! [variables]
//! VITE_THEME = "light"
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::VariableMap;
use crate::core::env::validate::validate_variables;
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;

/// Default placeholder marker prepended to variable names in built files.
pub const DEFAULT_PLACEHOLDER: &str = "%%";

/// Application prefixes recognized by default.
pub const DEFAULT_PREFIXES: &[&str] = &["REACT_APP_", "VITE_"];

/// Allow-listed keys recognized by default.
pub const DEFAULT_SPECIAL_KEYS: &[&str] = &["PUBLIC_URL"];

/// Global object the variable file assigns onto by default.
pub const DEFAULT_GLOBAL_OBJECT: &str = "window";

/// Complete application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Marker that precedes a variable name in placeholder tokens.
    pub placeholder: String,
    /// Key prefixes that mark a variable as application-visible.
    pub prefixes: Vec<String>,
    /// Exact keys that are application-visible regardless of prefix.
    pub special_keys: Vec<String>,
    /// Global object the generated variable file assigns onto.
    pub global_object: String,
    /// Dotenv file read into the environment context.
    pub dotenv_path: PathBuf,
    /// Fallback values layered beneath the ambient environment.
    ///
    /// Kept untyped so non-string values surface as a validation error
    /// instead of a deserialization failure.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            prefixes: DEFAULT_PREFIXES.iter().map(ToString::to_string).collect(),
            special_keys: DEFAULT_SPECIAL_KEYS.iter().map(ToString::to_string).collect(),
            global_object: DEFAULT_GLOBAL_OBJECT.to_string(),
            dotenv_path: PathBuf::from(".env"),
            variables: serde_json::Map::new(),
        }
    }
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dynamic_env::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("dynamic-env.toml")
    ///     .with_env_prefix("DYNAMIC_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Settings` structure or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty placeholder or
    /// global object, or a `ValidationError` when `[variables]` holds
    /// non-string values.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "placeholder".to_string(),
                message: "placeholder must not be empty".to_string(),
            }
            .into());
        }
        if self.global_object.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "global_object".to_string(),
                message: "global object must not be empty".to_string(),
            }
            .into());
        }
        self.fallback_variables()?;
        Ok(())
    }

    /// Returns the `[variables]` table as a validated [`VariableMap`].
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError::NonStringValues` listing every key whose
    /// value is not a string.
    pub fn fallback_variables(&self) -> Result<VariableMap> {
        Ok(validate_variables(&serde_json::Value::Object(
            self.variables.clone(),
        ))?)
    }
}
