//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: `[host] run: ...` progress lines

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
