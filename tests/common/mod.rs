//! Shared integration-test harness for running the `dsc-docs` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the compiled `dsc-docs` binary.
pub struct DscDocsProcess;

impl DscDocsProcess {
    /// Runs the binary with `args` to completion and captures its output.
    ///
    /// Inherited registry and log settings are cleared so tests only see
    /// what they pass explicitly.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dsc-docs"))
            .args(args)
            .env_remove("DSC_DOCS_REGISTRY")
            .env_remove("DSC_DOCS_LOG_LEVEL")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to spawn dsc-docs")
    }

    /// Runs the binary against a fixture registry file.
    pub fn spawn_with_fixture(fixture: &str, args: &[&str]) -> Output {
        let path = Self::fixture_path(fixture);
        let mut full: Vec<&str> = args.to_vec();
        full.push("--registry");
        full.push(path.to_str().expect("non-UTF-8 fixture path"));
        Self::spawn_command(&full)
    }

    /// Returns the path to a test fixture file.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Stdout as a string.
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Stderr as a string.
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
