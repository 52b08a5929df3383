// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::Context;
use tokio::fs;
use tracing::debug;

use super::outcome::FileOperationOutcome;
use crate::config::DEFAULT_GLOBAL_OBJECT;
use crate::core::env::VariableMap;
use crate::error::Result;

/// Writes variable maps as browser scripts that assign a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputWriter {
    global_object: String,
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBAL_OBJECT)
    }
}

impl OutputWriter {
    pub fn new(global_object: impl Into<String>) -> Self {
        Self {
            global_object: global_object.into(),
        }
    }

    #[must_use]
    pub fn global_object(&self) -> &str {
        &self.global_object
    }

    /// Renders `<global>.<name> = <pretty JSON>;` for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be serialized.
    pub fn render(&self, var_name: &str, config: &VariableMap) -> Result<String> {
        let json = serde_json::to_string_pretty(config).context("failed to serialize variables")?;
        Ok(format!("{}.{var_name} = {json};\n", self.global_object))
    }

    /// Writes the rendered script to `folder/file_name`, creating `folder`
    /// first. An existing file is replaced.
    pub async fn write_variable_file(
        &self,
        folder: &Path,
        file_name: &str,
        config: &VariableMap,
        var_name: &str,
    ) -> FileOperationOutcome {
        let target = std::path::absolute(folder.join(file_name))
            .unwrap_or_else(|_| folder.join(file_name));

        let result: Result<()> = async {
            let script = self.render(var_name, config)?;
            fs::create_dir_all(folder)
                .await
                .with_context(|| format!("failed to create directory {}", folder.display()))?;
            fs::write(&target, script)
                .await
                .with_context(|| format!("failed to write {}", target.display()))?;
            debug!(path = %target.display(), variables = config.len(), "wrote variable file");
            Ok(())
        }
        .await;

        FileOperationOutcome::from_result(target, result)
    }
}
