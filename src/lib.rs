//! simdeploy - deploy a git checkout to simulation hosts over SSH
//!
//! A small table of named target profiles (single machines or host groups)
//! and one deploy routine: make sure the remote working copy exists, then
//! fetch, check out a ref and pull. Every remote step runs through the
//! system `ssh` client so keys and agent forwarding behave exactly as they
//! do interactively.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase, FailurePolicy, HostStatus};
pub use config::{load_settings, Config, Settings};
pub use domain::entities::{DeploymentContext, TargetProfile};
pub use domain::value_objects::{GitRef, HostSet};
pub use error::{ConfigError, DeployError, DeployResult};
