//! Remote Shell Port
//!
//! Abstracts command execution on a deployment host. The deploy use case only
//! sees this trait, so it can run against ssh, a dry-run recorder, or an
//! in-memory fake in tests.

use crate::domain::entities::Connection;
use crate::error::DeployError;

/// Captured result of one remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A zero-status result with no output
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn with_status(status: i32) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// `Ok(self)` on status 0, otherwise the matching `RemoteCommand` error
    pub fn into_result(self, host: &str, command: &str) -> Result<Self, DeployError> {
        if self.success() {
            Ok(self)
        } else {
            Err(DeployError::RemoteCommand {
                host: host.to_string(),
                command: command.to_string(),
                status: self.status,
                stderr: self.stderr,
            })
        }
    }
}

/// Command execution on one remote host.
///
/// Two call variants:
/// - [`try_run`](RemoteShell::try_run) reports any exit status as data; only
///   a transport failure is an error.
/// - [`run`](RemoteShell::run) additionally turns a non-zero status into
///   [`DeployError::RemoteCommand`].
pub trait RemoteShell {
    /// The connection this shell talks to
    fn connection(&self) -> &Connection;

    /// Run `command`, tolerating a non-zero exit status
    fn try_run(&self, command: &str) -> Result<CommandOutput, DeployError>;

    /// Run `command`, failing on a non-zero exit status
    fn run(&self, command: &str) -> Result<CommandOutput, DeployError> {
        self.try_run(command)?
            .into_result(&self.connection().host, command)
    }
}

/// Opens a [`RemoteShell`] per host
pub trait ShellFactory {
    type Shell: RemoteShell;

    fn open(&self, connection: Connection) -> Self::Shell;
}
