// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use futures_util::future::BoxFuture;

use super::copy::{RecursiveCopier, TreeCopier};
use super::outcome::FileOperationOutcome;
use super::output::OutputWriter;
use crate::config::Settings;
use crate::core::env::VariableMap;
use crate::replace::pattern::PatternBuilder;
use crate::replace::rewrite::ContentRewriter;
use crate::replace::walk::TreeWalker;

/// Filesystem effects a motion may perform.
///
/// Every operation reports through [`FileOperationOutcome`] instead of
/// returning an error, so callers decide how failures are surfaced.
pub trait FileHandler: Send + Sync {
    fn write_variable_file<'a>(
        &'a self,
        folder: &'a Path,
        file_name: &'a str,
        config: &'a VariableMap,
        var_name: &'a str,
    ) -> BoxFuture<'a, FileOperationOutcome>;

    fn copy_folder<'a>(
        &'a self,
        source: &'a Path,
        destination: &'a Path,
    ) -> BoxFuture<'a, FileOperationOutcome>;

    fn replace_files_in_directory<'a>(
        &'a self,
        root: &'a Path,
        config: &'a VariableMap,
    ) -> BoxFuture<'a, Vec<FileOperationOutcome>>;
}

/// Default [`FileHandler`] over the local filesystem.
pub struct FileOps {
    writer: OutputWriter,
    copier: Box<dyn TreeCopier>,
    walker: TreeWalker,
}

impl Default for FileOps {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl FileOps {
    /// Creates the handler with the placeholder and global object from
    /// `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            writer: OutputWriter::new(settings.global_object.clone()),
            copier: Box::new(RecursiveCopier),
            walker: TreeWalker::new(PatternBuilder::new(settings.placeholder.clone())),
        }
    }

    /// Replaces the folder copy strategy.
    #[must_use]
    pub fn with_copier(mut self, copier: impl TreeCopier + 'static) -> Self {
        self.copier = Box::new(copier);
        self
    }

    /// Replaces the content rewrite strategy.
    #[must_use]
    pub fn with_rewriter(mut self, rewriter: impl ContentRewriter + 'static) -> Self {
        self.walker = self.walker.with_rewriter(rewriter);
        self
    }
}

impl FileHandler for FileOps {
    fn write_variable_file<'a>(
        &'a self,
        folder: &'a Path,
        file_name: &'a str,
        config: &'a VariableMap,
        var_name: &'a str,
    ) -> BoxFuture<'a, FileOperationOutcome> {
        Box::pin(
            self.writer
                .write_variable_file(folder, file_name, config, var_name),
        )
    }

    fn copy_folder<'a>(
        &'a self,
        source: &'a Path,
        destination: &'a Path,
    ) -> BoxFuture<'a, FileOperationOutcome> {
        Box::pin(async move {
            let result = self.copier.copy_tree(source, destination).await;
            FileOperationOutcome::from_result(destination, result)
        })
    }

    fn replace_files_in_directory<'a>(
        &'a self,
        root: &'a Path,
        config: &'a VariableMap,
    ) -> BoxFuture<'a, Vec<FileOperationOutcome>> {
        Box::pin(self.walker.walk_and_rewrite(root, config))
    }
}
