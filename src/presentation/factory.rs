//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::Settings;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, SshShellFactory};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<SshShellFactory>;

/// Event sink for the requested output mode
pub fn create_event_sink(json: bool) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout())
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// Commands go through the ssh program named in `settings`.
pub fn create_deploy_use_case(settings: &Settings, json: bool) -> ConcreteDeployUseCase {
    DeployUseCase::new(SshShellFactory::new(settings.ssh_program.clone()))
        .with_event_sink(create_event_sink(json))
}
