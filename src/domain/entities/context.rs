//! Deployment context entity
//!
//! Holds the process-wide defaults and the currently selected target. It is
//! built once at startup, mutated only by [`DeploymentContext::select`], and
//! handed to the deploy use case by reference.

use crate::domain::entities::{Connection, TargetProfile};
use crate::error::DeployError;

/// Process-wide defaults applied to every profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Login used when a profile has no `user`; `None` lets ssh decide
    pub user: Option<String>,
    /// Remote working copy used when a profile has no `remote_dir`
    pub remote_dir: String,
    /// Git URL cloned onto fresh hosts
    pub repository: String,
    /// Pass `-A` to ssh so the remote `git` can use the local agent
    pub forward_agent: bool,
    pub connect_timeout: Option<u64>,
}

/// A profile merged with the defaults: everything deploy needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub profile: String,
    pub hosts: Vec<String>,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub remote_dir: String,
    pub repository: String,
    pub forward_agent: bool,
    pub connect_timeout: Option<u64>,
}

impl ResolvedTarget {
    /// Connection parameters for one of this target's hosts
    pub fn connection(&self, host: &str) -> Connection {
        Connection {
            host: host.to_string(),
            user: self.user.clone(),
            port: self.port,
            forward_agent: self.forward_agent,
            connect_timeout: self.connect_timeout,
        }
    }

    /// Check that every field deploy relies on is populated
    pub fn validate(&self) -> Result<(), DeployError> {
        if self.hosts.is_empty() {
            return Err(DeployError::config(format!(
                "profile '{}' has no hosts",
                self.profile
            )));
        }
        if self.hosts.iter().any(|h| h.trim().is_empty()) {
            return Err(DeployError::config(format!(
                "profile '{}' has an empty host name",
                self.profile
            )));
        }
        if self.remote_dir.trim().is_empty() {
            return Err(DeployError::config(format!(
                "profile '{}' has no remote directory",
                self.profile
            )));
        }
        if self.repository.trim().is_empty() {
            return Err(DeployError::config("no repository URL configured"));
        }
        if matches!(self.user.as_deref(), Some(u) if u.trim().is_empty()) {
            return Err(DeployError::config(format!(
                "profile '{}' has an empty user",
                self.profile
            )));
        }
        Ok(())
    }
}

/// Defaults plus at most one selected target
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    defaults: Defaults,
    current: Option<ResolvedTarget>,
}

impl DeploymentContext {
    pub fn new(defaults: Defaults) -> Self {
        Self {
            defaults,
            current: None,
        }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Resolve a profile against the defaults without selecting it
    pub fn resolve(&self, profile: &TargetProfile) -> ResolvedTarget {
        ResolvedTarget {
            profile: profile.name.clone(),
            hosts: profile.hosts.hosts().to_vec(),
            user: match profile.user.as_deref() {
                Some("") => None,
                Some(user) => Some(user.to_string()),
                None => self.defaults.user.clone(),
            },
            port: profile.port,
            remote_dir: profile
                .remote_dir
                .clone()
                .unwrap_or_else(|| self.defaults.remote_dir.clone()),
            repository: self.defaults.repository.clone(),
            forward_agent: self.defaults.forward_agent,
            connect_timeout: self.defaults.connect_timeout,
        }
    }

    /// Make `profile` the current target.
    ///
    /// Replaces any previous selection wholesale; nothing from an earlier
    /// profile survives.
    pub fn select(&mut self, profile: &TargetProfile) -> &ResolvedTarget {
        let resolved = self.resolve(profile);
        self.current.insert(resolved)
    }

    pub fn current(&self) -> Option<&ResolvedTarget> {
        self.current.as_ref()
    }

    /// The current target, validated, or a config error
    pub fn require_target(&self) -> Result<&ResolvedTarget, DeployError> {
        let target = self
            .current
            .as_ref()
            .ok_or_else(|| DeployError::config("no target profile selected"))?;
        target.validate()?;
        Ok(target)
    }
}
