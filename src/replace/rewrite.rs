// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential content rewriting.

use regex::{NoExpand, Regex};
use tracing::warn;

use super::pattern::ReplacementSpec;

/// Applies a [`ReplacementSpec`] to a text blob.
pub trait ContentRewriter: Send + Sync {
    fn rewrite(&self, content: &str, spec: &ReplacementSpec) -> String;
}

/// Regex-backed rewriter.
///
/// Each matcher replaces every occurrence in the text produced by the
/// previous pair. Replacement values are inserted literally, so `$` in a
/// value is never read as a capture reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexRewriter;

impl ContentRewriter for RegexRewriter {
    fn rewrite(&self, content: &str, spec: &ReplacementSpec) -> String {
        if content.is_empty() || spec.is_empty() || !spec.is_well_formed() {
            return content.to_string();
        }

        spec.from
            .iter()
            .zip(&spec.to)
            .fold(content.to_string(), |acc, (source, replacement)| {
                match Regex::new(source) {
                    Ok(re) => {
                        let replacement = replacement.as_deref().unwrap_or_default();
                        re.replace_all(&acc, NoExpand(replacement)).into_owned()
                    }
                    Err(e) => {
                        warn!(pattern = %source, error = %e, "invalid replacement pattern, skipping");
                        acc
                    }
                }
            })
    }
}
