// dynamic-env: Runtime Environment Injection for Static Builds
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use futures_util::future::BoxFuture;

use super::build::{BuildMotion, BuildParams};
use super::inject::{InjectMotion, InjectParams};
use super::set::{SetMotion, SetParams};
use super::{dispatch, overlay};
use crate::cli::Command;
use crate::cli::build::BuildArgs;
use crate::cli::set::SetArgs;
use crate::config::Settings;
use crate::core::env::VariableMap;
use crate::core::env::source::{EnvironmentContext, EnvironmentSource, KeyPolicy};
use crate::core::process::command::CommandExecutor;
use crate::error::{ConfigError, ValidationError};
use crate::utility::fs::handler::FileHandler;
use crate::utility::fs::outcome::FileOperationOutcome;

fn sample_env() -> EnvironmentSource {
    let context = EnvironmentContext::from_pairs([
        ("REACT_APP_API_URL", Some("https://api")),
        ("VITE_APP_NAME", Some("demo")),
        ("PUBLIC_URL", Some("/app")),
        ("OTHER", Some("z")),
    ]);
    EnvironmentSource::new(Some(context), KeyPolicy::default()).unwrap()
}

type RunCall = (String, VariableMap, Vec<String>);

#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<RunCall>>,
    failure: Option<&'static str>,
}

impl CommandExecutor for RecordingRunner {
    fn run<'a>(
        &'a self,
        command: &'a str,
        config: &'a VariableMap,
        bypass_keys: &'a [String],
    ) -> BoxFuture<'a, FileOperationOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), config.clone(), bypass_keys.to_vec()));
        let outcome = match self.failure {
            Some(message) => FileOperationOutcome::failed(".", anyhow::anyhow!(message)),
            None => FileOperationOutcome::succeeded("."),
        };
        Box::pin(std::future::ready(outcome))
    }
}

type WriteCall = (PathBuf, String, VariableMap, String);

#[derive(Default)]
struct FakeFiles {
    writes: Mutex<Vec<WriteCall>>,
    copies: Mutex<Vec<(PathBuf, PathBuf)>>,
    walks: Mutex<Vec<(PathBuf, VariableMap)>>,
    fail_write: bool,
    fail_copy: bool,
    unreadable: Vec<&'static str>,
}

impl FileHandler for FakeFiles {
    fn write_variable_file<'a>(
        &'a self,
        folder: &'a Path,
        file_name: &'a str,
        config: &'a VariableMap,
        var_name: &'a str,
    ) -> BoxFuture<'a, FileOperationOutcome> {
        self.writes.lock().unwrap().push((
            folder.to_path_buf(),
            file_name.to_string(),
            config.clone(),
            var_name.to_string(),
        ));
        let path = folder.join(file_name);
        let outcome = if self.fail_write {
            FileOperationOutcome::failed(path, anyhow::anyhow!("read-only filesystem"))
        } else {
            FileOperationOutcome::succeeded(path)
        };
        Box::pin(std::future::ready(outcome))
    }

    fn copy_folder<'a>(
        &'a self,
        source: &'a Path,
        destination: &'a Path,
    ) -> BoxFuture<'a, FileOperationOutcome> {
        self.copies
            .lock()
            .unwrap()
            .push((source.to_path_buf(), destination.to_path_buf()));
        let outcome = if self.fail_copy {
            FileOperationOutcome::failed(destination, anyhow::anyhow!("source missing"))
        } else {
            FileOperationOutcome::succeeded(destination)
        };
        Box::pin(std::future::ready(outcome))
    }

    fn replace_files_in_directory<'a>(
        &'a self,
        root: &'a Path,
        config: &'a VariableMap,
    ) -> BoxFuture<'a, Vec<FileOperationOutcome>> {
        self.walks
            .lock()
            .unwrap()
            .push((root.to_path_buf(), config.clone()));
        let mut outcomes = vec![FileOperationOutcome::succeeded(root.join("a.js"))];
        outcomes.extend(self.unreadable.iter().map(|name| {
            FileOperationOutcome::failed(root.join(name), anyhow::anyhow!("unreadable"))
        }));
        Box::pin(std::future::ready(outcomes))
    }
}

fn build_params(command: &str, dotenv: bool, bypass: &[&str]) -> BuildParams {
    BuildParams {
        command: command.to_string(),
        dotenv,
        bypass: bypass.iter().map(ToString::to_string).collect(),
    }
}

// --- overlay ---

#[test]
fn test_overlay_contains_all_variables() {
    let config = overlay(&sample_env());
    assert_eq!(config.len(), 4);
    assert_eq!(config.get("OTHER").map(String::as_str), Some("z"));
}

// --- build ---

#[test]
fn test_build_params_from_args() {
    let args = BuildArgs {
        dotenv: "false".to_string(),
        bypass: vec!["VITE_SECRET".to_string()],
        command: vec!["npm".to_string(), "run".to_string(), "build".to_string()],
    };
    assert_eq!(
        BuildParams::try_from(&args).unwrap(),
        build_params("npm run build", false, &["VITE_SECRET"])
    );
}

#[test]
fn test_build_params_reject_bad_input() {
    let empty = BuildArgs {
        dotenv: "true".to_string(),
        ..BuildArgs::default()
    };
    assert!(matches!(
        BuildParams::try_from(&empty),
        Err(ValidationError::EmptyCommand)
    ));

    let bad_flag = BuildArgs {
        dotenv: "yes".to_string(),
        command: vec!["make".to_string()],
        ..BuildArgs::default()
    };
    assert!(matches!(
        BuildParams::try_from(&bad_flag),
        Err(ValidationError::InvalidBoolean { .. })
    ));
}

#[test]
fn test_build_configuration_respects_dotenv_flag() {
    let motion = BuildMotion::new(sample_env(), RecordingRunner::default());
    assert!(motion.configuration(true).contains_key("OTHER"));

    let narrowed = motion.configuration(false);
    assert!(!narrowed.contains_key("OTHER"));
    assert_eq!(narrowed.len(), 3);
}

#[tokio::test]
async fn test_build_exposes_placeholders_and_bypasses() {
    let motion = BuildMotion::new(sample_env(), RecordingRunner::default());
    motion
        .execute(&build_params("npm run build", true, &["REACT_APP_API_URL"]))
        .await
        .unwrap();

    let calls = motion_calls(&motion);
    assert_eq!(calls.len(), 1);
    let (command, config, bypass) = &calls[0];
    insta::assert_snapshot!(
        command,
        @"PUBLIC_URL=%%PUBLIC_URL VITE_APP_NAME=%%VITE_APP_NAME npm run build"
    );
    assert_eq!(
        config.get("REACT_APP_API_URL").map(String::as_str),
        Some("https://api")
    );
    assert_eq!(bypass, &["REACT_APP_API_URL"]);
}

#[tokio::test]
async fn test_build_uses_configured_placeholder() {
    let motion =
        BuildMotion::new(sample_env(), RecordingRunner::default()).with_placeholder("@@");
    motion
        .execute(&build_params("make", false, &["PUBLIC_URL", "REACT_APP_API_URL"]))
        .await
        .unwrap();

    let calls = motion_calls(&motion);
    assert_eq!(calls[0].0, "VITE_APP_NAME=@@VITE_APP_NAME make");
}

#[tokio::test]
async fn test_build_failure_surfaces_error() {
    let runner = RecordingRunner {
        failure: Some("exit code 2"),
        ..RecordingRunner::default()
    };
    let err = BuildMotion::new(sample_env(), runner)
        .execute(&build_params("make", true, &[]))
        .await
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"build command failed: exit code 2");
}

fn motion_calls(motion: &BuildMotion<EnvironmentSource, RecordingRunner>) -> Vec<RunCall> {
    motion.runner().calls.lock().unwrap().clone()
}

// --- inject ---

#[tokio::test]
async fn test_inject_in_place() {
    let motion = InjectMotion::new(sample_env(), FakeFiles::default());
    let params = InjectParams {
        dir: PathBuf::from("build"),
        output: None,
    };
    motion.execute(&params).await.unwrap();

    let files = motion.files();
    assert!(files.copies.lock().unwrap().is_empty());
    let walks = files.walks.lock().unwrap();
    assert_eq!(walks.len(), 1);
    assert_eq!(walks[0].0, PathBuf::from("build"));
    assert_eq!(walks[0].1.get("OTHER").map(String::as_str), Some("z"));
}

#[tokio::test]
async fn test_inject_copies_then_rewrites_copy() {
    let motion = InjectMotion::new(sample_env(), FakeFiles::default());
    let params = InjectParams {
        dir: PathBuf::from("build"),
        output: Some(PathBuf::from("dist")),
    };
    motion.execute(&params).await.unwrap();

    let files = motion.files();
    assert_eq!(
        *files.copies.lock().unwrap(),
        [(PathBuf::from("build"), PathBuf::from("dist"))]
    );
    assert_eq!(files.walks.lock().unwrap()[0].0, PathBuf::from("dist"));
}

#[tokio::test]
async fn test_inject_copy_failure_stops_before_rewrite() {
    let files = FakeFiles {
        fail_copy: true,
        ..FakeFiles::default()
    };
    let motion = InjectMotion::new(sample_env(), files);
    let params = InjectParams {
        dir: PathBuf::from("build"),
        output: Some(PathBuf::from("dist")),
    };
    let err = motion.execute(&params).await.unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"failed to copy folder to dist: source missing");
    assert!(motion.files().walks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_inject_lists_failed_files() {
    let files = FakeFiles {
        unreadable: vec!["b.js", "c.js"],
        ..FakeFiles::default()
    };
    let motion = InjectMotion::new(sample_env(), files);
    let params = InjectParams {
        dir: PathBuf::from("build"),
        output: None,
    };
    let err = motion.execute(&params).await.unwrap_err();

    let root = Path::new("build");
    assert_eq!(
        err.to_string(),
        format!(
            "failed to process files: {}, {}",
            root.join("b.js").display(),
            root.join("c.js").display()
        )
    );
}

// --- set ---

#[test]
fn test_set_configuration_is_application_only() {
    let motion = SetMotion::new(sample_env(), FakeFiles::default());
    let config = motion.configuration();
    assert_eq!(
        config.keys().collect::<Vec<_>>(),
        ["PUBLIC_URL", "REACT_APP_API_URL", "VITE_APP_NAME"]
    );
}

#[tokio::test]
async fn test_set_writes_variable_file() {
    let motion = SetMotion::new(sample_env(), FakeFiles::default());
    let params = SetParams::try_from(&SetArgs::default()).unwrap();
    motion.execute(&params).await.unwrap();

    let writes = motion.files().writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    let (folder, file_name, config, var_name) = &writes[0];
    assert_eq!(folder, &PathBuf::from("./build"));
    assert_eq!(file_name, "env.js");
    assert_eq!(var_name, "env");
    assert!(!config.contains_key("OTHER"));
}

#[tokio::test]
async fn test_set_write_failure() {
    let files = FakeFiles {
        fail_write: true,
        ..FakeFiles::default()
    };
    let motion = SetMotion::new(sample_env(), files);
    let params = SetParams {
        dir: PathBuf::from("out"),
        file_name: "env.js".to_string(),
        var_name: "env".to_string(),
    };
    let err = motion.execute(&params).await.unwrap_err();
    assert!(err.to_string().starts_with("failed to write environment file"));
    assert!(err.to_string().ends_with("read-only filesystem"));
}

#[test]
fn test_set_params_require_values() {
    let args = SetArgs {
        name: "  ".to_string(),
        ..SetArgs::default()
    };
    match SetParams::try_from(&args) {
        Err(ConfigError::MissingArgument { name }) => assert_eq!(name, "--name"),
        other => panic!("unexpected result: {other:?}"),
    }
}

// --- dispatch ---

#[tokio::test]
async fn test_dispatch_version() {
    dispatch(&Command::Version, &Settings::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dispatch_rejects_empty_build_command() {
    let args = BuildArgs {
        dotenv: "false".to_string(),
        ..BuildArgs::default()
    };
    let err = dispatch(&Command::Build(args), &Settings::default())
        .await
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"command must not be empty");
}
