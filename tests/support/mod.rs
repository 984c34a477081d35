//! Test support utilities for vaultlayer integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding options, base files and secrets
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with an options file written.
    pub fn with_options(contents: &str) -> Self {
        let t = Self::new();
        t.write_options(contents);
        t
    }

    /// Write `vault.toml` in the test directory.
    pub fn write_options(&self, contents: &str) -> PathBuf {
        self.write("vault.toml", contents)
    }

    /// Write a secret file for `mount_point`/`path`.
    pub fn write_secret(&self, mount_point: &str, path: &str, json: &str) -> PathBuf {
        self.write(&format!("secrets/{}/{}.json", mount_point, path), json)
    }

    /// Write a file relative to the test directory.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }
}
