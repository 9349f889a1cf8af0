//! Error types for simdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Exit status used when the SSH transport itself fails (ssh's own convention)
pub const SSH_TRANSPORT_STATUS: i32 = 255;

/// Failure of a single host's deployment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
    /// The SSH transport could not be established
    #[error("[{host}] connection failed: {message}")]
    Connection { host: String, message: String },

    /// A remote command exited non-zero
    #[error("[{host}] command `{command}` exited with status {status}{}", stderr_suffix(.stderr))]
    RemoteCommand {
        host: String,
        command: String,
        status: i32,
        stderr: String,
    },

    /// No target selected, or the selected target is incomplete
    #[error("configuration error: {0}")]
    Config(String),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl DeployError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Process exit code for this error.
    ///
    /// Remote command failures propagate the remote status so callers can
    /// tell `git checkout` failures apart from transport failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection { .. } => SSH_TRANSPORT_STATUS,
            Self::RemoteCommand { status, .. } if *status != 0 => *status,
            Self::RemoteCommand { .. } => 1,
            Self::Config(_) => 2,
        }
    }
}

/// Errors raised while loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML
    #[error("invalid config in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// Two profiles share a name inside one file
    #[error("duplicate profile '{name}' in {file}")]
    DuplicateProfile { name: String, file: PathBuf },

    /// Environment override with a value that cannot be interpreted
    #[error("invalid value '{value}' for {var} (expected {expected})")]
    InvalidEnv {
        var: String,
        value: String,
        expected: String,
    },

    /// Host pattern could not be expanded
    #[error("invalid host pattern '{pattern}': {reason}")]
    InvalidHostPattern { pattern: String, reason: String },
}
