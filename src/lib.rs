// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (motions)
//!                |            build / inject / set
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + DYNAMIC_ENV__*    |
//!              '-------------+-------------'
//!                            |
//!             +--------------+--------------+
//!             v                             v
//!          replace                     utility::fs
//!   PatternBuilder, RegexRewriter   copy, output, FileOps
//!   TreeWalker
//!
//!   +-----------------------------------------+
//!   |  core   env sourcing, process runner    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod replace;
pub mod utility;
