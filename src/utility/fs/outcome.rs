// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::path::{Path, PathBuf};

/// Result record of one filesystem or process operation.
///
/// `error` is set exactly when `success` is false.
#[derive(Debug)]
pub struct FileOperationOutcome {
    pub success: bool,
    pub path: PathBuf,
    pub error: Option<anyhow::Error>,
}

impl FileOperationOutcome {
    pub fn succeeded(path: impl Into<PathBuf>) -> Self {
        Self {
            success: true,
            path: path.into(),
            error: None,
        }
    }

    pub fn failed(path: impl Into<PathBuf>, error: impl Into<anyhow::Error>) -> Self {
        Self {
            success: false,
            path: path.into(),
            error: Some(error.into()),
        }
    }

    /// Folds an operation result into an outcome for `path`.
    pub fn from_result<T>(path: impl Into<PathBuf>, result: crate::error::Result<T>) -> Self {
        match result {
            Ok(_) => Self::succeeded(path),
            Err(e) => Self::failed(path, e),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for FileOperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "ok: {}", self.path.display()),
            Some(e) => write!(f, "failed: {}: {e:#}", self.path.display()),
        }
    }
}
