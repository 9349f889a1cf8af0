//! Command handlers for the simdeploy binary

pub mod deploy;
pub mod profiles;

use std::path::Path;

use anyhow::Result;

use simdeploy::config::{self, ConfigWarning, Settings};

/// Load settings for this invocation and report unknown config keys on stderr
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let (settings, warnings) = config::load_settings(explicit, &cwd)?;
    print_config_warnings(&warnings);
    Ok(settings)
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "Warning: Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!(
                "Warning: Unknown config key '{}' in {}",
                w.key,
                w.file.display()
            ),
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// Error for a profile name that is not in the table
pub(crate) fn unknown_profile(settings: &Settings, name: &str) -> anyhow::Error {
    let hint = settings
        .suggest_profile(name)
        .map(|s| format!(". Did you mean '{}'?", s))
        .unwrap_or_default();
    anyhow::Error::new(simdeploy::DeployError::config(format!(
        "unknown profile '{}'{}",
        name, hint
    )))
}
