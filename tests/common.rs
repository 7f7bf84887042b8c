// tests/common.rs

use std::fs;
use std::path::Path;
use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not by the library tests.
pub fn pathscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pathscan"))
}

/// Creates a file (and its parent directories) under `root`.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: &str) {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
}
