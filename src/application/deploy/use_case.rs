//! Deploy Use Case
//!
//! Brings the remote working copy on every host of the selected target to a
//! git ref:
//! 1. Probe for the remote directory (tolerant)
//! 2. Create and clone it when absent
//! 3. Inside the directory: fetch, checkout the ref, pull
//!
//! Hosts are processed one at a time in the order the profile lists them.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{DeploymentContext, ResolvedTarget};
use crate::domain::ports::{DeployEvent, DeployEventSink, NoopEventSink, ShellFactory};
use crate::domain::services::git_commands;
use crate::error::DeployError;

use super::options::{DeployOptions, FailurePolicy};
use super::result::{DeployReport, HostOutcome, HostStatus};
use super::session::RemoteSession;

/// Deploy use case - parameterized by how remote shells are opened
pub struct DeployUseCase<F: ShellFactory> {
    shells: F,
    event_sink: Arc<dyn DeployEventSink>,
}

impl<F: ShellFactory> DeployUseCase<F> {
    pub fn new(shells: F) -> Self {
        Self {
            shells,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, sink: Arc<dyn DeployEventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Deploy the context's current target.
    ///
    /// Returns `Err` only when the context is unusable (nothing selected or
    /// fields missing); in that case no remote command has been issued.
    /// Per-host failures are recorded in the report.
    pub fn execute(
        &self,
        context: &DeploymentContext,
        options: &DeployOptions,
    ) -> Result<DeployReport, DeployError> {
        let target = context.require_target()?;
        let mut report = DeployReport::new(&target.profile);
        let mut halted = false;

        for host in &target.hosts {
            if halted {
                report.outcomes.push(HostOutcome {
                    host: host.clone(),
                    status: HostStatus::NotAttempted,
                });
                continue;
            }

            let status = match self.deploy_host(target, host, options) {
                Ok(cloned) => {
                    self.event_sink.on_event(DeployEvent::HostCompleted {
                        host: host.clone(),
                        cloned,
                        dry_run: options.dry_run,
                    });
                    HostStatus::Deployed { cloned }
                }
                Err(err) => {
                    warn!(host = %host, error = %err, "deploy failed");
                    self.event_sink.on_event(DeployEvent::HostFailed {
                        host: host.clone(),
                        error: err.to_string(),
                    });
                    halted = options.failure_policy == FailurePolicy::HaltOnFirst;
                    HostStatus::Failed(err)
                }
            };
            report.outcomes.push(HostOutcome {
                host: host.clone(),
                status,
            });
        }

        self.event_sink.on_event(DeployEvent::Finished {
            succeeded: report.succeeded(),
            failed: report.failed(),
            not_attempted: report.not_attempted(),
        });
        Ok(report)
    }

    /// Run the deploy routine against one host; returns whether it cloned
    /// (never true in a dry run)
    fn deploy_host(
        &self,
        target: &ResolvedTarget,
        host: &str,
        options: &DeployOptions,
    ) -> Result<bool, DeployError> {
        info!(
            host = %host,
            profile = %target.profile,
            git_ref = %options.git_ref,
            "deploying"
        );
        self.event_sink.on_event(DeployEvent::HostStarted {
            host: host.to_string(),
            profile: target.profile.clone(),
            git_ref: options.git_ref.to_string(),
        });

        let shell = self.shells.open(target.connection(host));
        let mut session =
            RemoteSession::new(&shell, self.event_sink.as_ref()).with_dry_run(options.dry_run);
        let dir = target.remote_dir.as_str();

        let exists = session.try_run(&git_commands::test_dir(dir))?.success();
        self.event_sink.on_event(DeployEvent::Probed {
            host: host.to_string(),
            path: dir.to_string(),
            exists,
        });

        if !exists {
            info!(host = %host, dir = %dir, "remote directory missing, cloning");
            session.run(&git_commands::mkdir_p(dir))?;
            session.run(&git_commands::git_clone(&target.repository, dir))?;
        }

        session.within(dir, |s| {
            s.run(&git_commands::git_fetch())?;
            s.run(&git_commands::git_checkout(options.git_ref.as_str()))?;
            s.run(&git_commands::git_pull())?;
            Ok(())
        })?;

        Ok(!exists && !options.dry_run)
    }
}
