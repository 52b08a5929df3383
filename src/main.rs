// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> init_logging --> run()
//!   version            no settings
//!   build|inject|set   Settings --> cmd::dispatch
//! ```

use std::process::ExitCode;

use anyhow::{Context, bail};
use dynamic_env::cli::global::GlobalOptions;
use dynamic_env::cli::{self, Cli, Command};
use dynamic_env::cmd;
use dynamic_env::config::Settings;
use dynamic_env::config::loader::ConfigLoader;
use dynamic_env::error::Result;
use dynamic_env::logging::{LogConfig, LogLevel, init_logging};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Settings file picked up from the working directory.
const DEFAULT_CONFIG_FILE: &str = "dynamic-env.toml";

/// Prefix of `DYNAMIC_ENV__*` settings overrides.
const ENV_PREFIX: &str = "DYNAMIC_ENV";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&log_config(&cli.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        bail!("no command given, see --help");
    };
    let settings = match command {
        Command::Version => Settings::default(),
        _ => settings_loader(&cli.global)
            .build()
            .context("failed to load settings")?,
    };
    cmd::dispatch(command, &settings).await
}

fn log_config(global: &GlobalOptions) -> LogConfig {
    let level = |raw: Option<u8>| raw.and_then(|n| LogLevel::try_from(n).ok());

    LogConfig::builder()
        .with_console_level(level(global.log_level).unwrap_or_default())
        .maybe_with_file_level(level(global.file_log_level))
        .maybe_with_log_file(global.log_file.clone())
        .with_env_override(global.log_level.is_none())
        .build()
}

fn settings_loader(global: &GlobalOptions) -> ConfigLoader {
    let loader = if global.no_default_config {
        ConfigLoader::new()
    } else {
        ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE)
    };
    global
        .configs
        .iter()
        .fold(loader, ConfigLoader::add_toml_file)
        .with_env_prefix(ENV_PREFIX)
}
