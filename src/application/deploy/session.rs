//! Remote Session
//!
//! Wraps a [`RemoteShell`] with a working-directory stack and event
//! reporting. Commands issued inside [`RemoteSession::within`] are sent as
//! `cd <dir> && <cmd>`; the directory is popped when the closure returns,
//! on success and on error alike.

use tracing::debug;

use crate::domain::ports::{CommandOutput, DeployEvent, DeployEventSink, RemoteShell};
use crate::domain::services::in_dir;
use crate::error::DeployError;

pub struct RemoteSession<'a, S: RemoteShell> {
    shell: &'a S,
    sink: &'a dyn DeployEventSink,
    cwd: Vec<String>,
    dry_run: bool,
}

impl<'a, S: RemoteShell> RemoteSession<'a, S> {
    pub fn new(shell: &'a S, sink: &'a dyn DeployEventSink) -> Self {
        Self {
            shell,
            sink,
            cwd: Vec::new(),
            dry_run: false,
        }
    }

    /// In dry-run mode [`run`](Self::run) reports commands without sending
    /// them; [`try_run`](Self::try_run) still executes.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn host(&self) -> &str {
        &self.shell.connection().host
    }

    /// Current remote working directory, if inside a `within` block
    pub fn cwd(&self) -> Option<&str> {
        self.cwd.last().map(String::as_str)
    }

    /// Run `f` with `dir` as the remote working directory.
    ///
    /// Relative directories nest under the enclosing one.
    pub fn within<T>(
        &mut self,
        dir: &str,
        f: impl FnOnce(&mut Self) -> Result<T, DeployError>,
    ) -> Result<T, DeployError> {
        let effective = match self.cwd() {
            Some(parent) if !dir.starts_with('/') && !dir.starts_with('~') => {
                format!("{}/{}", parent.trim_end_matches('/'), dir)
            }
            _ => dir.to_string(),
        };
        self.cwd.push(effective);
        let result = f(self);
        self.cwd.pop();
        result
    }

    /// Execute a command whose non-zero exit status is an answer, not an error
    pub fn try_run(&self, command: &str) -> Result<CommandOutput, DeployError> {
        let line = self.render(command);
        self.started(&line);
        let output = self.shell.try_run(&line)?;
        self.finished(&line, &output);
        Ok(output)
    }

    /// Execute a command that must succeed
    pub fn run(&self, command: &str) -> Result<CommandOutput, DeployError> {
        let line = self.render(command);
        if self.dry_run {
            debug!(host = %self.host(), command = %line, "dry run, not executing");
            self.sink.on_event(DeployEvent::CommandSkipped {
                host: self.host().to_string(),
                command: line,
            });
            return Ok(CommandOutput::ok());
        }

        self.started(&line);
        let output = self.shell.try_run(&line)?;
        self.finished(&line, &output);
        output.into_result(self.host(), &line)
    }

    fn render(&self, command: &str) -> String {
        match self.cwd() {
            Some(dir) => in_dir(dir, command),
            None => command.to_string(),
        }
    }

    fn started(&self, line: &str) {
        debug!(host = %self.host(), command = %line, "running remote command");
        self.sink.on_event(DeployEvent::CommandStarted {
            host: self.host().to_string(),
            command: line.to_string(),
        });
    }

    fn finished(&self, line: &str, output: &CommandOutput) {
        debug!(host = %self.host(), command = %line, status = output.status, "remote command finished");
        self.sink.on_event(DeployEvent::CommandFinished {
            host: self.host().to_string(),
            command: line.to_string(),
            status: output.status,
            stdout: output.stdout.clone(),
            stderr: output.stderr.clone(),
        });
    }
}
