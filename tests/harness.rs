//! Test harness for treeline integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use treeline::test_utils::TestDir;

/// Run the binary in `dir` with color disabled; returns (stdout, stderr, success).
pub fn run_treeline(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_treeline");
    let output = Command::new(binary)
        .args(["--color", "never"])
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run treeline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Command for assertions that need stdin or predicate matching.
pub fn treeline_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_treeline"));
    cmd.args(["--color", "never"]).env_remove("RUST_LOG");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
