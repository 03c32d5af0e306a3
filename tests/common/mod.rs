//! Common test utilities for mdredirect integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A documentation tree in a temporary directory
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the site root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create an empty test site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the site, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the site
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the site
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the entries directly under `dir`, sorted
    pub fn list_dir(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(dir))
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    pub fn root(&self) -> &Path {
        &self.path
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// The mdredirect binary with a clean environment
#[allow(deprecated, dead_code)]
pub fn mdredirect_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mdredirect").expect("mdredirect binary should build");
    cmd.env_remove("MDREDIRECT_ROOT")
        .env_remove("MDREDIRECT_BASE_PATH")
        .env_remove("MDREDIRECT_CONFIG")
        .env_remove("MDREDIRECT_FAULT_POINT")
        .env_remove("RUST_LOG");
    cmd
}
