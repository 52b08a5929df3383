// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem effects with per-operation outcomes.
//!
//! ```text
//! outcome:  FileOperationOutcome { success, path, error }
//! copy:     TreeCopier, RecursiveCopier   tokio::fs, children in parallel
//! output:   OutputWriter                  <global>.<name> = {...};
//! handler:  FileHandler, FileOps          seam used by the motions
//! ```

pub mod copy;
pub mod handler;
pub mod outcome;
pub mod output;
