//! SSH Remote Shell
//!
//! Implements RemoteShell by invoking the system `ssh` client once per
//! command. Authentication is left entirely to ssh and the user's agent.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::domain::entities::Connection;
use crate::domain::ports::{CommandOutput, RemoteShell, ShellFactory};
use crate::error::{DeployError, SSH_TRANSPORT_STATUS};

/// Default ssh executable
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Remote shell for a single host
pub struct SshShell {
    program: String,
    connection: Connection,
}

impl SshShell {
    pub fn new(program: impl Into<String>, connection: Connection) -> Self {
        Self {
            program: program.into(),
            connection,
        }
    }

    /// Arguments passed to ssh before the remote command
    fn ssh_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.connection.forward_agent {
            args.push("-A".to_string());
        }
        if let Some(port) = self.connection.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(timeout) = self.connection.connect_timeout {
            args.push("-o".to_string());
            args.push(format!("ConnectTimeout={}", timeout));
        }
        args.push(self.connection.destination());
        args
    }

    fn connection_error(&self, message: impl Into<String>) -> DeployError {
        DeployError::Connection {
            host: self.connection.host.clone(),
            message: message.into(),
        }
    }
}

impl RemoteShell for SshShell {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    fn try_run(&self, command: &str) -> Result<CommandOutput, DeployError> {
        let args = self.ssh_args();
        trace!(program = %self.program, args = ?args, command = %command, "spawning ssh");

        let output = Command::new(&self.program)
            .args(&args)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.connection_error(format!("failed to run {}: {}", self.program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let status = match output.status.code() {
            Some(code) => code,
            None => return Err(self.connection_error("ssh terminated by signal")),
        };
        if status == SSH_TRANSPORT_STATUS {
            return Err(self.connection_error(stderr.trim().to_string()));
        }

        debug!(host = %self.connection.host, status, "ssh command returned");
        Ok(CommandOutput {
            status,
            stdout,
            stderr,
        })
    }
}

/// Opens [`SshShell`]s using a configurable ssh executable
#[derive(Debug, Clone)]
pub struct SshShellFactory {
    program: String,
}

impl SshShellFactory {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SshShellFactory {
    fn default() -> Self {
        Self::new(DEFAULT_SSH_PROGRAM)
    }
}

impl ShellFactory for SshShellFactory {
    type Shell = SshShell;

    fn open(&self, connection: Connection) -> SshShell {
        SshShell::new(&self.program, connection)
    }
}
