//! Shared integration-test helpers for running the `coursework` binary and
//! locating fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs the `coursework` binary with the given arguments and waits for it.
#[allow(clippy::missing_panics_doc)]
pub fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coursework"))
        .args(args)
        .env_remove("COURSEWORK_LOG_LEVEL")
        .env_remove("COURSEWORK_COLOR")
        .env_remove("COURSEWORK_LOG_FORMAT")
        .output()
        .expect("failed to run coursework")
}

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Writes `value` as JSON to `dir/name` and returns the path.
#[allow(clippy::missing_panics_doc)]
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

/// The literal five-field document used throughout the tests.
pub fn literal_document() -> serde_json::Value {
    serde_json::json!({
        "size": 100,
        "name": "Test",
        "simulation": true,
        "path": "data/somewhere",
        "duration": 10.0
    })
}
