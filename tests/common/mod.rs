//! Common test utilities for spyce integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding the files a test works on
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a binary file in workspace
    pub fn write_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the entries directly inside `path`
    pub fn entries(&self, path: &str) -> Vec<String> {
        list_dir(&self.path.join(path))
    }

    /// A `spyce` command running inside this workspace
    pub fn spyce(&self) -> Command {
        let mut cmd = spyce_cmd();
        cmd.current_dir(&self.path)
            .env_remove("SPYCE_BACKUP_FORMAT")
            .env_remove("SPYCE_LOG");
        cmd
    }
}

/// Sorted names of the entries of a directory
#[allow(dead_code)]
pub fn list_dir(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(path)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn spyce_cmd() -> Command {
    Command::cargo_bin("spyce").unwrap()
}

#[allow(deprecated, dead_code)]
pub fn demo_cmd(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

/// A small Python script with one source and one data block
#[allow(dead_code)]
pub const TOOL_PY: &str = "\
#!/usr/bin/env python3
# spyce: section source
# spyce: start source/helper:text
def helper():
    return 1
# spyce: end source/helper:text

print(helper())

# spyce: section data
# spyce: start data/notes.txt:text
remember the milk
# spyce: end data/notes.txt:text
";
