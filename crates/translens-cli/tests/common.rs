//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    source: PathBuf,
    target: PathBuf,
    log_group: PathBuf,
    config: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = temp_dir.path().join("source");
        let target = temp_dir.path().join("target");
        let log_group = temp_dir.path().join("bot-logs.jsonl");

        fs::create_dir_all(&source).expect("Failed to create source dir");
        fs::create_dir_all(&target).expect("Failed to create target dir");

        // Points at a file that never exists, so runs see defaults
        // instead of the invoking user's config.
        let config = temp_dir.path().join("config.toml");

        Self {
            _temp_dir: temp_dir,
            source,
            target,
            log_group,
            config,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn log_group(&self) -> &Path {
        &self.log_group
    }

    pub fn write_source(&self, key: &str, body: &str) {
        let path = self.source.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create source subdir");
        }
        fs::write(path, body).expect("Failed to write source object");
    }

    pub fn write_log_lines(&self, lines: &[String]) {
        fs::write(&self.log_group, lines.join("\n")).expect("Failed to write log group");
    }

    pub fn target_keys(&self) -> Vec<String> {
        Self::keys_under(&self.target)
    }

    pub fn source_keys(&self) -> Vec<String> {
        Self::keys_under(&self.source)
    }

    pub fn read_target(&self, key: &str) -> String {
        fs::read_to_string(self.target.join(key)).expect("Failed to read target object")
    }

    pub fn read_source(&self, key: &str) -> String {
        fs::read_to_string(self.source.join(key)).expect("Failed to read source object")
    }

    fn keys_under(root: &Path) -> Vec<String> {
        fn walk(dir: &Path, root: &Path, keys: &mut Vec<String>) {
            let Ok(entries) = fs::read_dir(dir) else {
                return;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(&path, root, keys);
                } else {
                    let relative = path.strip_prefix(root).unwrap();
                    keys.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }

        let mut keys = Vec::new();
        walk(root, root, &mut keys);
        keys.sort();
        keys
    }

    /// Command with config isolation and a fixed seed applied
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("translens").expect("Binary should exist");
        cmd.arg("--config").arg(&self.config).arg("--seed").arg("7");
        cmd
    }
}
