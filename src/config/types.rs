//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Defaults, DeploymentContext, TargetProfile};
use crate::domain::value_objects::HostSet;
use crate::error::ConfigError;
use crate::infrastructure::ssh::DEFAULT_SSH_PROGRAM;

use super::builtin::{builtin_defaults, builtin_profiles};
use super::loader::{self, ConfigWarning};

/// `[defaults]` table: process-wide values every profile falls back to
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub remote_dir: Option<String>,

    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub forward_agent: Option<bool>,
}

/// `[ssh]` table: transport settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SshConfig {
    /// ssh executable (name on PATH or absolute path)
    #[serde(default)]
    pub program: Option<String>,

    /// Seconds, passed as `-o ConnectTimeout=N`
    #[serde(default)]
    pub connect_timeout: Option<u64>,
}

/// One `[[profiles]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    pub name: String,

    /// Single host shorthand; combined with `hosts` if both are given
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub hosts: Vec<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub remote_dir: Option<String>,
}

impl ProfileConfig {
    pub fn to_profile(&self) -> Result<TargetProfile, ConfigError> {
        let patterns = self.host.iter().chain(self.hosts.iter());
        Ok(TargetProfile {
            name: self.name.clone(),
            hosts: HostSet::from_patterns(patterns)?,
            user: self.user.clone(),
            port: self.port,
            remote_dir: self.remote_dir.clone(),
        })
    }
}

/// Contents of a config file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub ssh: SshConfig,

    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }
}

/// Fully merged configuration: built-ins, file, and environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub defaults: Defaults,
    pub profiles: Vec<TargetProfile>,
    pub ssh_program: String,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Built-in profile table only
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_config(&Config::default(), None)
    }

    /// Merge a config file over the built-ins.
    ///
    /// File profiles replace built-ins of the same name and keep their
    /// position; new names are appended in file order.
    pub fn from_config(config: &Config, source: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut defaults = builtin_defaults();
        if let Some(user) = &config.defaults.user {
            defaults.user = if user.is_empty() {
                None
            } else {
                Some(user.clone())
            };
        }
        if let Some(dir) = &config.defaults.remote_dir {
            defaults.remote_dir = dir.clone();
        }
        if let Some(repo) = &config.defaults.repository {
            defaults.repository = repo.clone();
        }
        if let Some(forward) = config.defaults.forward_agent {
            defaults.forward_agent = forward;
        }
        defaults.connect_timeout = config.ssh.connect_timeout;

        let mut profiles = builtin_profiles()?;
        let mut seen: Vec<&str> = Vec::new();
        for entry in &config.profiles {
            if seen.contains(&entry.name.as_str()) {
                return Err(ConfigError::DuplicateProfile {
                    name: entry.name.clone(),
                    file: source.clone().unwrap_or_default(),
                });
            }
            seen.push(&entry.name);

            let profile = entry.to_profile()?;
            match profiles.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => *existing = profile,
                None => profiles.push(profile),
            }
        }

        Ok(Self {
            defaults,
            profiles,
            ssh_program: config
                .ssh
                .program
                .clone()
                .unwrap_or_else(|| DEFAULT_SSH_PROGRAM.to_string()),
            source,
        })
    }

    pub fn profile(&self, name: &str) -> Option<&TargetProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Closest profile name, for "did you mean" hints
    pub fn suggest_profile(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        self.profiles
            .iter()
            .map(|p| (p.name.as_str(), loader::levenshtein(&lowered, &p.name.to_lowercase())))
            .filter(|(_, dist)| *dist <= 2)
            .min_by_key(|(_, dist)| *dist)
            .map(|(name, _)| name)
    }

    /// Fresh deployment context with nothing selected
    pub fn context(&self) -> DeploymentContext {
        DeploymentContext::new(self.defaults.clone())
    }
}
