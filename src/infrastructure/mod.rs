//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ssh/` - Remote shell over the system `ssh` client
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod ssh;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use ssh::{SshShell, SshShellFactory};
