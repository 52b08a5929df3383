// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Placeholder pattern generation.

use crate::config::DEFAULT_PLACEHOLDER;
use crate::core::env::VariableMap;

/// Ordered (matcher, replacement) pairs consumed by a content rewriter.
///
/// Matchers are regex sources compiled at rewrite time, so a malformed one
/// only costs its own pair. A `None` replacement is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSpec {
    pub from: Vec<String>,
    pub to: Vec<Option<String>>,
}

impl ReplacementSpec {
    /// Builds the pairs from literal matchers and values.
    pub fn from_pairs<I, F, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let (from, to) = pairs
            .into_iter()
            .map(|(f, t)| (f.into(), Some(t.into())))
            .unzip();
        Self { from, to }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Matcher and replacement counts agree.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.from.len() == self.to.len()
    }
}

/// Turns variable names into placeholder matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBuilder {
    placeholder: String,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl PatternBuilder {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The literal token a build embeds for `key`, e.g. `%%VITE_API_URL`.
    #[must_use]
    pub fn token(&self, key: &str) -> String {
        format!("{}{key}", self.placeholder)
    }

    /// Regex source matching the token for `key` as a whole word.
    ///
    /// The trailing boundary stops `%%VITE_API` from matching inside
    /// `%%VITE_API_URL`. A leading boundary is only added when the
    /// placeholder itself starts with a word character, otherwise tokens
    /// directly after quotes or spaces would never match.
    #[must_use]
    pub fn matcher(&self, key: &str) -> String {
        let token = self.token(key);
        let lead = if token.chars().next().is_some_and(is_word_char) {
            r"\b"
        } else {
            ""
        };
        let trail = if token.chars().next_back().is_some_and(is_word_char) {
            r"\b"
        } else {
            ""
        };
        format!("{lead}{}{trail}", regex::escape(&token))
    }

    /// One (matcher, value) pair per variable, in map order.
    #[must_use]
    pub fn build_patterns(&self, config: &VariableMap) -> ReplacementSpec {
        let (from, to) = config
            .iter()
            .map(|(key, value)| (self.matcher(key), Some(value.clone())))
            .unzip();
        ReplacementSpec { from, to }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
