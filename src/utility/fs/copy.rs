// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, bail};
use futures_util::future::{BoxFuture, try_join_all};
use tokio::fs;
use tracing::debug;

use crate::error::{FsError, Result};

/// Strategy for mirroring one directory tree into another.
pub trait TreeCopier: Send + Sync {
    /// Copies everything under `source` into `destination`, creating it
    /// (and any parents) as needed.
    fn copy_tree<'a>(&'a self, source: &'a Path, destination: &'a Path) -> BoxFuture<'a, Result<()>>;
}

/// Copies directory entries concurrently, one task per child.
///
/// Existing destination files are overwritten. The first failure aborts the
/// copy; entries already written are left in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveCopier;

impl TreeCopier for RecursiveCopier {
    fn copy_tree<'a>(&'a self, source: &'a Path, destination: &'a Path) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match fs::metadata(source).await {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => return Err(FsError::NotADirectory(source.display().to_string()).into()),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(FsError::NotFound(source.display().to_string()).into());
                }
                Err(source_err) => {
                    return Err(FsError::IoError {
                        path: source.display().to_string(),
                        source: source_err,
                    }
                    .into());
                }
            }
            ensure_disjoint(source, destination).await?;
            copy_entry(source, destination).await?;
            debug!(
                source = %source.display(),
                destination = %destination.display(),
                "copied folder"
            );
            Ok(())
        })
    }
}

fn copy_entry<'a>(source: &'a Path, destination: &'a Path) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let meta = fs::metadata(source)
            .await
            .with_context(|| format!("failed to stat {}", source.display()))?;

        if !meta.is_dir() {
            fs::copy(source, destination).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    source.display(),
                    destination.display()
                )
            })?;
            return Ok(());
        }

        fs::create_dir_all(destination)
            .await
            .with_context(|| format!("failed to create directory {}", destination.display()))?;

        let mut entries = fs::read_dir(source)
            .await
            .with_context(|| format!("failed to read directory {}", source.display()))?;
        let mut children = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("failed to read entry from {}", source.display()))?
        {
            children.push((entry.path(), destination.join(entry.file_name())));
        }

        try_join_all(
            children
                .into_iter()
                .map(|(from, to)| async move { copy_entry(&from, &to).await }),
        )
        .await?;
        Ok(())
    })
}

/// Rejects copying a tree into itself, which would never terminate.
///
/// Both sides are resolved through symlinks and `..` before comparing.
async fn ensure_disjoint(source: &Path, destination: &Path) -> Result<()> {
    let source = fs::canonicalize(source)
        .await
        .with_context(|| format!("failed to resolve {}", source.display()))?;
    let destination = resolve_destination(destination).await?;
    if destination.starts_with(&source) {
        bail!(
            "destination {} is inside source {}",
            destination.display(),
            source.display()
        );
    }
    Ok(())
}

/// Canonicalizes the closest existing ancestor of `path`, then applies the
/// remaining components lexically.
async fn resolve_destination(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)
        .with_context(|| format!("failed to resolve {}", path.display()))?;

    let mut existing = path.as_path();
    let mut rest = Vec::new();
    let mut base = loop {
        match fs::canonicalize(existing).await {
            Ok(resolved) => break resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("failed to resolve {}", existing.display()));
            }
        }
        let (Some(parent), Some(name)) = (existing.parent(), existing.components().next_back()) else {
            break PathBuf::new();
        };
        rest.push(name);
        existing = parent;
    };

    for component in rest.into_iter().rev() {
        match component {
            Component::ParentDir => {
                base.pop();
            }
            Component::CurDir => {}
            other => base.push(other),
        }
    }
    Ok(base)
}
