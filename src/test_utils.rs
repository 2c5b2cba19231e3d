//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory and everything in it is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `path` pointing to `target` (which need not exist).
    pub fn add_symlink(&self, path: &str, target: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Set the permission bits of an existing path.
    pub fn set_mode(&self, path: &str, mode: u32) {
        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
