// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed failures, surfaced through `anyhow` chains.
//!
//! ```text
//!                  DynamicEnvError
//!   +---------+---------+---------+---------+
//!   v         v         v         v         v
//! Config  Validation    Fs     Process   Motion     (each Box<_>)
//!
//!   Config     EnvironmentUnavailable, InvalidValue, Dotenv, MissingArgument
//!   Validation NotAnObject, NonStringValues, EmptyCommand, InvalidBoolean
//!   Fs         NotFound, NotADirectory, IoError
//!   Process    SpawnFailed, NonZeroExit, StderrOutput
//!   Motion     FilesFailed, CopyFailed, WriteFailed, BuildFailed
//! ```
//!
//! Operations return [`Result`] and attach context at each filesystem or
//! process boundary. The sub-error enums are what callers downcast to.

use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

pub type DynamicEnvResult<T> = std::result::Result<T, DynamicEnvError>;

/// Any failure the crate can name.
///
/// Variants are boxed so the enum stays pointer-sized plus a tag.
#[derive(Debug, Error)]
pub enum DynamicEnvError {
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    #[error("validation error: {0}")]
    Validation(#[from] Box<ValidationError>),

    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    #[error("{0}")]
    Motion(#[from] Box<MotionError>),
}

macro_rules! boxed_from {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DynamicEnvError {
                fn from(err: $error) -> Self {
                    Self::$variant(Box::new(err))
                }
            }
        )+
    };
}

boxed_from! {
    ConfigError => Config,
    ValidationError => Validation,
    FsError => Fs,
    ProcessError => Process,
    MotionError => Motion,
}

// --- Config Errors ---

/// Configuration-related errors. All of these are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No environment could be captured for the current process.
    #[error("process environment is not available")]
    EnvironmentUnavailable,

    /// Invalid setting value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// The dotenv file exists but could not be parsed.
    #[error("failed to parse dotenv file '{path}': {message}")]
    Dotenv { path: String, message: String },

    /// A required command-line argument was not supplied.
    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },
}

// --- Validation Errors ---

/// Errors raised at the validation boundary.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The variable source is not a key/value object.
    #[error("variable source must be an object of strings")]
    NotAnObject,

    /// One or more variables hold a non-string value.
    #[error("all environment values must be strings. Invalid keys: {}", keys.join(", "))]
    NonStringValues { keys: Vec<String> },

    /// The build command is empty after trimming.
    #[error("command must not be empty")]
    EmptyCommand,

    /// A boolean flag received something other than `true`/`false`.
    #[error("expected 'true' or 'false', received: {value}")]
    InvalidBoolean { value: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process wrote to its error stream.
    #[error("process '{command}' reported errors: {stderr}")]
    StderrOutput { command: String, stderr: String },
}

// --- Motion Errors ---

/// Terminal failures of a CLI motion.
#[derive(Debug, Error)]
pub enum MotionError {
    /// Some files in the target directory could not be rewritten.
    #[error("failed to process files: {}", paths.join(", "))]
    FilesFailed { paths: Vec<String> },

    /// The build folder could not be copied to the output location.
    #[error("failed to copy folder to {destination}: {message}")]
    CopyFailed { destination: String, message: String },

    /// The variable file could not be written.
    #[error("failed to write environment file {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// The build command failed.
    #[error("build command failed: {message}")]
    BuildFailed { message: String },
}
