//! Test environment builder for isolated simdeploy testing.
//!
//! Provides `TestEnv` - a temp working directory and a temp HOME, plus a
//! fake `ssh` that records every remote command instead of connecting.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::FAKE_SSH_SCRIPT;

/// Result of running a simdeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub project_root: TempDir,
    /// Temporary directory for HOME (keeps user config out of the test)
    pub home_dir: TempDir,
    /// Fake ssh script plus its logs and state
    pub ssh_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            ssh_dir: TempDir::new().expect("Failed to create ssh dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_simdeploy")),
        };
        env.install_fake_ssh();
        env
    }

    /// Get path relative to the working directory
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn fake_ssh(&self) -> PathBuf {
        self.ssh_dir.path().join("ssh")
    }

    /// Write `simdeploy.toml` in the working directory
    pub fn write_config(&self, content: &str) {
        fs::write(self.project_path("simdeploy.toml"), content).expect("Failed to write config");
    }

    /// Make the fake remote report that the working copy already exists
    pub fn mark_remote_dir_existing(&self) {
        fs::write(self.ssh_dir.path().join("exists"), "").expect("Failed to write marker");
    }

    /// Remote commands the fake ssh received, in order
    pub fn remote_commands(&self) -> Vec<String> {
        read_lines(&self.ssh_dir.path().join("commands.log"))
    }

    /// Full ssh argument lists, one per invocation
    pub fn ssh_invocations(&self) -> Vec<String> {
        read_lines(&self.ssh_dir.path().join("args.log"))
    }

    /// Run simdeploy in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run simdeploy with extra env vars (e.g. `FAKE_SSH_FAIL`)
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("SIMDEPLOY_USER")
            .env_remove("SIMDEPLOY_REPOSITORY")
            .env_remove("SIMDEPLOY_REMOTE_DIR")
            .env_remove("SIMDEPLOY_FORWARD_AGENT")
            .env_remove("SIMDEPLOY_LOG")
            .env("SIMDEPLOY_SSH", self.fake_ssh())
            .env("FAKE_SSH_LOG", self.ssh_dir.path().join("commands.log"))
            .env("FAKE_SSH_ARGS_LOG", self.ssh_dir.path().join("args.log"))
            .env("FAKE_SSH_STATE", self.ssh_dir.path());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute simdeploy");
        output_to_result(output)
    }

    fn install_fake_ssh(&self) {
        let path = self.fake_ssh();
        fs::write(&path, FAKE_SSH_SCRIPT).expect("Failed to write fake ssh");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod fake ssh");
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
