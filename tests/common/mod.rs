pub mod mock_asr;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use tuxdictate::config::{Config, CONFIG_ENV};

/// Isolated config for running the binary
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new(config: Config) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config/tuxdictate/config.json");
        config.save_to(&config_path).expect("Failed to write config");

        TestContext {
            temp_dir,
            config_path,
        }
    }

    /// Run the binary with `args`, feeding `stdin`
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_tuxdictate");

        let mut child = Command::new(bin_path)
            .args(args)
            .env(CONFIG_ENV, &self.config_path)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn tuxdictate");

        child
            .stdin
            .take()
            .expect("stdin not piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for tuxdictate")
    }

    /// Run and return stdout, asserting success
    pub fn stdout(&self, args: &[&str], stdin: &str) -> String {
        let output = self.run(args, stdin);
        assert!(
            output.status.success(),
            "tuxdictate failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
