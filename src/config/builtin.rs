//! Built-in target profiles
//!
//! The machines the simulation code is normally deployed to. A config file
//! can replace any of these by name or add new ones.

use crate::domain::entities::{Defaults, TargetProfile};
use crate::domain::value_objects::HostSet;
use crate::error::ConfigError;

const DEFAULT_USER: &str = "rabr5411";
const DEFAULT_REMOTE_DIR: &str = "/home/rabr5411/sims/DistributedBaseStationClustering.jl";
const DEFAULT_REPOSITORY: &str =
    "git@gitr.sys.kth.se:rabr5411/DistributedBaseStationClustering.jl.git";

/// One row of the built-in profile table
pub struct BuiltinProfile {
    pub name: &'static str,
    /// Host names or `{a..b}` patterns
    pub hosts: &'static [&'static str],
    pub user: Option<&'static str>,
    pub port: Option<u16>,
    pub remote_dir: Option<&'static str>,
}

pub const BUILTIN_PROFILES: &[BuiltinProfile] = &[
    BuiltinProfile {
        name: "gastown",
        hosts: &["gastown.156106636.members.btmm.icloud.com"],
        user: Some("rasmus"),
        port: None,
        remote_dir: Some("/Users/rasmus/Desktop/sims/DistributedBaseStationClustering.jl"),
    },
    BuiltinProfile {
        name: "KTHdebsim",
        hosts: &["130.237.50.52"],
        user: Some("rabrdeb"),
        port: Some(1024),
        remote_dir: Some("/home/rabrdeb/sims/DistributedBaseStationClustering.jl"),
    },
    BuiltinProfile {
        name: "sim401",
        hosts: &["sim401.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
    BuiltinProfile {
        name: "sim402",
        hosts: &["sim402.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
    BuiltinProfile {
        name: "sim403",
        hosts: &["sim403.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
    BuiltinProfile {
        name: "sim404",
        hosts: &["sim404.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
    BuiltinProfile {
        name: "sim405",
        hosts: &["sim405.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
    BuiltinProfile {
        name: "all",
        hosts: &["sim40{1..5}.ee.kth.se"],
        user: None,
        port: None,
        remote_dir: None,
    },
];

pub fn builtin_defaults() -> Defaults {
    Defaults {
        user: Some(DEFAULT_USER.to_string()),
        remote_dir: DEFAULT_REMOTE_DIR.to_string(),
        repository: DEFAULT_REPOSITORY.to_string(),
        forward_agent: true,
        connect_timeout: None,
    }
}

pub fn builtin_profiles() -> Result<Vec<TargetProfile>, ConfigError> {
    BUILTIN_PROFILES
        .iter()
        .map(|row| {
            Ok(TargetProfile {
                name: row.name.to_string(),
                hosts: HostSet::from_patterns(row.hosts)?,
                user: row.user.map(str::to_string),
                port: row.port,
                remote_dir: row.remote_dir.map(str::to_string),
            })
        })
        .collect()
}
