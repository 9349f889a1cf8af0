//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::domain::value_objects::GitRef;

/// What to do with the remaining hosts after one fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing host; later hosts are not attempted
    #[default]
    HaltOnFirst,
    /// Keep deploying to the remaining hosts
    Continue,
}

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Ref to check out (defaults to `master`)
    pub git_ref: GitRef,
    pub failure_policy: FailurePolicy,
    /// Probe the remote, but only report the mutating commands
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(git_ref: GitRef) -> Self {
        Self {
            git_ref,
            ..Self::default()
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_keep_going(self, keep_going: bool) -> Self {
        self.with_failure_policy(if keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::HaltOnFirst
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
