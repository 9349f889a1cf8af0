//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::HostStarted {
                host,
                profile,
                git_ref,
            } => serde_json::json!({
                "event": "host_start",
                "command": "deploy",
                "host": host,
                "profile": profile,
                "ref": git_ref,
            }),

            DeployEvent::Probed { host, path, exists } => serde_json::json!({
                "event": "probe",
                "command": "deploy",
                "host": host,
                "path": path,
                "exists": exists,
            }),

            DeployEvent::CommandStarted { host, command } => serde_json::json!({
                "event": "command_start",
                "command": "deploy",
                "host": host,
                "run": command,
            }),

            DeployEvent::CommandFinished {
                host,
                command,
                status,
                stdout,
                stderr,
            } => serde_json::json!({
                "event": "command_end",
                "command": "deploy",
                "host": host,
                "run": command,
                "status": status,
                "stdout": stdout,
                "stderr": stderr,
            }),

            DeployEvent::CommandSkipped { host, command } => serde_json::json!({
                "event": "command_skipped",
                "command": "deploy",
                "host": host,
                "run": command,
            }),

            DeployEvent::HostCompleted {
                host,
                cloned,
                dry_run,
            } => serde_json::json!({
                "event": "host_complete",
                "command": "deploy",
                "host": host,
                "cloned": cloned,
                "dry_run": dry_run,
            }),

            DeployEvent::HostFailed { host, error } => serde_json::json!({
                "event": "host_error",
                "command": "deploy",
                "host": host,
                "error": error,
            }),

            DeployEvent::Finished {
                succeeded,
                failed,
                not_attempted,
            } => {
                let status = if failed == 0 { "success" } else { "failure" };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "not_attempted": not_attempted,
                })
            }
        };

        self.write_event(json);
    }
}
