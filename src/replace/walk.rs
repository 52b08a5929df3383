// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recursive in-place rewriting of a directory tree.
//!
//! ```text
//! walk(root)
//!   root unreadable       --> [failed(root)]
//!   for entry (parallel):
//!     dir                 --> walk(entry), failure => failed(entry)
//!     text file           --> rewrite, overwrite  => outcome
//!     non-UTF-8 file      --> left untouched      => succeeded
//!     stat error          --> failed(entry)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use futures_util::future::{BoxFuture, join_all};
use tokio::fs;
use tracing::{debug, warn};

use super::pattern::{PatternBuilder, ReplacementSpec};
use super::rewrite::{ContentRewriter, RegexRewriter};
use crate::core::env::VariableMap;
use crate::error::{FsError, Result};
use crate::utility::fs::outcome::FileOperationOutcome;

/// Rewrites every file under a root with the placeholder substitutions for a
/// variable map.
pub struct TreeWalker {
    patterns: PatternBuilder,
    rewriter: Box<dyn ContentRewriter>,
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(PatternBuilder::default())
    }
}

impl TreeWalker {
    #[must_use]
    pub fn new(patterns: PatternBuilder) -> Self {
        Self {
            patterns,
            rewriter: Box::new(RegexRewriter),
        }
    }

    /// Replaces the content rewriter.
    #[must_use]
    pub fn with_rewriter(mut self, rewriter: impl ContentRewriter + 'static) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternBuilder {
        &self.patterns
    }

    /// Walks `root` and returns one outcome per file visited.
    ///
    /// Outcomes are ordered by path. A failure on one file or subdirectory
    /// does not stop its siblings. If `root` itself cannot be listed the
    /// result is a single failed outcome for `root`.
    pub async fn walk_and_rewrite(
        &self,
        root: &Path,
        config: &VariableMap,
    ) -> Vec<FileOperationOutcome> {
        let spec = self.patterns.build_patterns(config);
        match self.visit_dir(root, &spec).await {
            Ok(outcomes) => {
                let failed = outcomes.iter().filter(|o| !o.success).count();
                debug!(root = %root.display(), files = outcomes.len(), failed, "rewrite finished");
                outcomes
            }
            Err(e) => {
                warn!(root = %root.display(), error = %e, "cannot walk directory");
                vec![FileOperationOutcome::failed(root, e)]
            }
        }
    }

    fn visit_dir<'a>(
        &'a self,
        dir: &'a Path,
        spec: &'a ReplacementSpec,
    ) -> BoxFuture<'a, Result<Vec<FileOperationOutcome>>> {
        Box::pin(async move {
            let entries = list_entries(dir).await?;
            let visits = entries.into_iter().map(move |path| async move {
                let meta = fs::metadata(&path).await;
                match meta {
                    Ok(meta) if meta.is_dir() => {
                        let nested = self.visit_dir(&path, spec).await;
                        nested.unwrap_or_else(|e| vec![FileOperationOutcome::failed(path, e)])
                    }
                    Ok(_) => vec![self.rewrite_file(path, spec).await],
                    Err(e) => {
                        let e = anyhow::Error::new(e)
                            .context(format!("failed to stat {}", path.display()));
                        vec![FileOperationOutcome::failed(path, e)]
                    }
                }
            });
            Ok(join_all(visits).await.into_iter().flatten().collect())
        })
    }

    async fn rewrite_file(&self, path: PathBuf, spec: &ReplacementSpec) -> FileOperationOutcome {
        let result: Result<()> = async {
            let bytes = fs::read(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            let Ok(content) = String::from_utf8(bytes) else {
                debug!(path = %path.display(), "skipping non-text file");
                return Ok(());
            };
            let rewritten = self.rewriter.rewrite(&content, spec);
            fs::write(&path, rewritten)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(())
        }
        .await;
        FileOperationOutcome::from_result(path, result)
    }
}

/// Lists the entries of `dir`, sorted by path.
async fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await.map_err(|source| FsError::IoError {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
