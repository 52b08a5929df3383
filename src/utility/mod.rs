// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:     RecursiveCopier
//!   output:   OutputWriter
//!   handler:  FileHandler, FileOps
//!   outcome:  FileOperationOutcome
//! ```

pub mod fs;
