//! Console Event Sink
//!
//! Prints deploy progress the way an operator reads it in a terminal:
//! every remote command prefixed with its host, remote output passed
//! through line by line and unmodified.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn render(event: &DeployEvent) -> Vec<String> {
        match event {
            DeployEvent::HostStarted {
                host,
                profile,
                git_ref,
            } => vec![format!(
                "[{}] Deploying {} (profile: {})",
                host, git_ref, profile
            )],
            DeployEvent::Probed { .. } => Vec::new(),
            DeployEvent::CommandStarted { host, command } => {
                vec![format!("[{}] run: {}", host, command)]
            }
            DeployEvent::CommandFinished {
                host,
                status,
                stdout,
                stderr,
                ..
            } => {
                let mut lines: Vec<String> = stdout
                    .lines()
                    .map(|l| format!("[{}] out: {}", host, l))
                    .chain(stderr.lines().map(|l| format!("[{}] err: {}", host, l)))
                    .collect();
                if *status != 0 {
                    lines.push(format!("[{}] exit status {}", host, status));
                }
                lines
            }
            DeployEvent::CommandSkipped { host, command } => {
                vec![format!("[{}] would run: {}", host, command)]
            }
            DeployEvent::HostCompleted {
                host,
                cloned,
                dry_run,
            } => {
                if *dry_run {
                    vec![format!("[{}] Dry run done, nothing changed", host)]
                } else if *cloned {
                    vec![format!("[{}] Done (fresh clone)", host)]
                } else {
                    vec![format!("[{}] Done", host)]
                }
            }
            DeployEvent::HostFailed { host, error } => {
                vec![format!("[{}] FAILED: {}", host, error)]
            }
            DeployEvent::Finished {
                succeeded,
                failed,
                not_attempted,
            } => {
                let mut summary = format!("\nSummary: {} succeeded, {} failed", succeeded, failed);
                if *not_attempted > 0 {
                    summary.push_str(&format!(", {} not attempted", not_attempted));
                }
                vec![summary]
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let lines = Self::render(&event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}
