//! Common test utilities for jsonboard integration tests.
//!
//! Provides `TestEnv` for isolated test environments so no test touches a
//! `board.json` in the developer's working directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// Minimal page used wherever a test needs an index file.
pub const INDEX_HTML: &str = "<!doctype html><title>board</title><h1>board</h1>";

/// A test environment with its own root directory.
///
/// The `jsonboard()` method returns a `Command` that points `JSONBOARD_ROOT`
/// at the temporary root per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an empty root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment with an `index.html` in the root.
    pub fn with_index() -> Self {
        let env = Self::new();
        std::fs::write(env.index_path(), INDEX_HTML).unwrap();
        env
    }

    /// Get a Command for the jsonboard binary rooted at this environment.
    pub fn jsonboard(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_jsonboard"));
        cmd.current_dir(self.root.path());
        cmd.env("JSONBOARD_ROOT", self.root.path());
        cmd.env_remove("JSONBOARD_DATA_FILE");
        cmd.env_remove("JSONBOARD_INDEX_FILE");
        cmd
    }

    /// Get the path to the root directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the default backing file.
    pub fn data_path(&self) -> PathBuf {
        self.root.path().join("board.json")
    }

    /// Path of the default static page.
    pub fn index_path(&self) -> PathBuf {
        self.root.path().join("index.html")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
