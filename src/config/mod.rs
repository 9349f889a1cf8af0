//! Configuration module for simdeploy
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags (`--config`, `--ref`)
//! 2. Environment variables (SIMDEPLOY_*)
//! 3. Config file (`--config`, `./simdeploy.toml`, `~/.config/simdeploy/config.toml`)
//! 4. Built-in profile table

mod builtin;
mod loader;
mod types;

pub use builtin::{builtin_defaults, builtin_profiles, BuiltinProfile, BUILTIN_PROFILES};
pub use loader::{
    discover_config_file, load_settings, load_with_warnings, with_env_overrides,
    with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DefaultsConfig, ProfileConfig, Settings, SshConfig};
