//! Deploy Result
//!
//! Per-host outcome of a deploy run.

use crate::error::DeployError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    /// Host reached the requested ref; `cloned` is true for a fresh checkout
    Deployed { cloned: bool },
    Failed(DeployError),
    /// Skipped because an earlier host failed under `HaltOnFirst`
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOutcome {
    pub host: String,
    pub status: HostStatus,
}

/// Result of a deploy operation across all hosts of a target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub profile: String,
    pub outcomes: Vec<HostOutcome>,
}

impl DeployReport {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.status, HostStatus::Deployed { .. }))
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, HostStatus::Deployed { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, HostStatus::Failed(_)))
    }

    pub fn not_attempted(&self) -> usize {
        self.count(|s| matches!(s, HostStatus::NotAttempted))
    }

    /// The first failure in host order
    pub fn first_error(&self) -> Option<&DeployError> {
        self.outcomes.iter().find_map(|o| match &o.status {
            HostStatus::Failed(err) => Some(err),
            _ => None,
        })
    }

    /// Process exit code: 0, or the first failure's code
    pub fn exit_code(&self) -> i32 {
        self.first_error().map(DeployError::exit_code).unwrap_or(0)
    }

    fn count(&self, pred: impl Fn(&HostStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
