// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Placeholder substitution engine.
//!
//! ```text
//! VariableMap --PatternBuilder--> ReplacementSpec { from: [regex src], to: [value] }
//!                                        |
//! file text --ContentRewriter------------+--> rewritten text
//!                                        |
//! root dir  --TreeWalker (fan-out per entry, per-file outcome)
//! ```
//!
//! Substitutions run in key order and each sees the output of the previous
//! one. When one key is a prefix of another the trailing word boundary keeps
//! them apart, but a value that itself contains a placeholder token will be
//! substituted again by a later key. That ordering sensitivity is kept as is.

pub mod pattern;
pub mod rewrite;
pub mod walk;

#[cfg(test)]
mod tests;
