// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation boundary for variable sources and motion parameters.

use serde_json::Value;

use super::VariableMap;
use crate::error::ValidationError;

/// Validates that `value` is an object whose values are all strings.
///
/// Offending keys are reported in the object's insertion order.
///
/// # Errors
///
/// Returns `ValidationError::NotAnObject` if `value` is not an object, or
/// `ValidationError::NonStringValues` listing every key with a non-string
/// value.
pub fn validate_variables(value: &Value) -> Result<VariableMap, ValidationError> {
    let Value::Object(object) = value else {
        return Err(ValidationError::NotAnObject);
    };

    let invalid: Vec<String> = object
        .iter()
        .filter(|(_, v)| !v.is_string())
        .map(|(k, _)| k.clone())
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::NonStringValues { keys: invalid });
    }

    Ok(object
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect())
}

/// Validates a shell command, returning it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyCommand` if nothing but whitespace remains.
pub fn validate_command(command: &str) -> Result<String, ValidationError> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCommand);
    }
    Ok(trimmed.to_string())
}

/// Joins the trailing CLI words into a single validated command.
///
/// # Errors
///
/// Returns `ValidationError::EmptyCommand` for an empty word list.
pub fn parse_command<S: AsRef<str>>(words: &[S]) -> Result<String, ValidationError> {
    let joined = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    validate_command(&joined)
}

/// Parses a strict `true`/`false` flag value.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBoolean` for anything else.
pub fn parse_boolean(value: &str) -> Result<bool, ValidationError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ValidationError::InvalidBoolean {
            value: other.to_string(),
        }),
    }
}
