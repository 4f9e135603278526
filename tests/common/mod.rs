//! Shared testing utilities for perfopt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tmp_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let tmp_dir = root.path().join("tmp");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&tmp_dir).expect("Failed to create test temp directory");

        Self { root, work_dir, tmp_dir }
    }

    /// Directory passed as `--working-directory` in tests that supply one.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory the CLI sees as its system temp directory.
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    /// Build a command for invoking the compiled `perfopt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("perfopt").expect("Failed to locate perfopt binary");
        cmd.current_dir(self.root.path())
            .env("TMPDIR", &self.tmp_dir)
            .env("TMP", &self.tmp_dir)
            .env("TEMP", &self.tmp_dir)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Entries created under the isolated temp directory.
    pub fn scratch_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.tmp_dir)
            .expect("Failed to read temp directory")
            .map(|entry| entry.expect("Failed to read temp entry").path())
            .collect();
        dirs.sort();
        dirs
    }
}
