//! Target profile entity

use crate::domain::value_objects::HostSet;

/// A named set of connection parameters for one deployment target.
///
/// Fields left as `None` fall back to the process-wide [`Defaults`] when the
/// profile is selected.
///
/// [`Defaults`]: super::Defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProfile {
    pub name: String,
    pub hosts: HostSet,
    /// `None` falls back to the default user; `Some("")` means no user at
    /// all, leaving the choice to ssh
    pub user: Option<String>,
    pub port: Option<u16>,
    pub remote_dir: Option<String>,
}

impl TargetProfile {
    pub fn new(name: impl Into<String>, hosts: HostSet) -> Self {
        Self {
            name: name.into(),
            hosts,
            user: None,
            port: None,
            remote_dir: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_remote_dir(mut self, dir: impl Into<String>) -> Self {
        self.remote_dir = Some(dir.into());
        self
    }

    /// True when the profile fans out to more than one host
    pub fn is_multi_host(&self) -> bool {
        self.hosts.len() > 1
    }
}
