// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run the built logsweep binary with the given arguments.
pub fn run_logsweep(args: &[&str]) -> (String, String, i32) {
    // Use the built binary directly instead of cargo run to avoid compilation output
    let binary_path = if cfg!(debug_assertions) {
        "./target/debug/logsweep"
    } else {
        "./target/release/logsweep"
    };

    let output = Command::new(binary_path)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute logsweep");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Write a file under `dir` and return its absolute path as a string.
pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path.to_str().unwrap().to_string()
}

/// A ready-to-run batch fixture: one nginx log, one generic log, one missing
/// path, one empty file.
pub struct BatchFixture {
    pub dir: TempDir,
    pub config_path: String,
}

pub fn mixed_batch_fixture() -> BatchFixture {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let nginx = write_file(dir.path(), "access.log", "g1\ng2\ng3\ng4\ng5");
    let generic = write_file(dir.path(), "misc.log", "one\ntwo\n");
    let empty = write_file(dir.path(), "empty.log", "");
    let missing = dir.path().join("not-there.log");

    let config = format!(
        r#"[
  {{"id": "nginx", "path": "{}", "type": "nginx-access"}},
  {{"id": "generic", "path": "{}", "type": "unknown-kind"}},
  {{"id": "empty", "path": "{}", "type": "custom-app"}},
  {{"id": "missing", "path": "{}", "type": "mysql-error"}}
]"#,
        nginx,
        generic,
        empty,
        missing.display()
    );
    let config_path = write_file(dir.path(), "configs.json", &config);

    BatchFixture { dir, config_path }
}
