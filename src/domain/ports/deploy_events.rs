//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console progress, NDJSON event streams, and test assertions.

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deployment to a host started
    HostStarted {
        host: String,
        profile: String,
        git_ref: String,
    },

    /// Existence check of the remote working copy finished
    Probed {
        host: String,
        path: String,
        exists: bool,
    },

    /// A remote command is about to run (as sent, including any `cd`)
    CommandStarted { host: String, command: String },

    /// A remote command finished
    CommandFinished {
        host: String,
        command: String,
        status: i32,
        stdout: String,
        stderr: String,
    },

    /// A command was not executed because of dry-run mode
    CommandSkipped { host: String, command: String },

    /// Host finished successfully. In a dry run nothing was changed and
    /// `cloned` is always false.
    HostCompleted {
        host: String,
        cloned: bool,
        dry_run: bool,
    },

    /// Host failed; remaining steps for it were not run
    HostFailed { host: String, error: String },

    /// All hosts processed
    Finished {
        succeeded: usize,
        failed: usize,
        not_attempted: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: `[host] run: ...` lines for terminals
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
