//! Configuration discovery, loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::types::{Config, Settings};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "simdeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::InvalidToml {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to read.
///
/// An explicit path always wins (and must exist); otherwise the first
/// existing of `<cwd>/simdeploy.toml` and `<config_dir>/simdeploy/config.toml`.
pub fn discover_config_file(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("simdeploy").join("config.toml");
    if user.is_file() {
        return Some(user);
    }

    None
}

/// Build the final settings: built-ins, then file, then environment
pub fn load_settings(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<(Settings, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings, source) = match discover_config_file(explicit, cwd) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            (config, warnings, Some(path))
        }
        None => {
            debug!("no config file found, using built-in profiles");
            (Config::default(), Vec::new(), None)
        }
    };

    let config = with_env_overrides(config)?;
    let settings = Settings::from_config(&config, source)?;
    Ok((settings, warnings))
}

/// Apply environment variable overrides (SIMDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Result<Config, ConfigError> {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_env_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    if let Some(user) = lookup("SIMDEPLOY_USER") {
        config.defaults.user = Some(user);
    }

    if let Some(repo) = lookup("SIMDEPLOY_REPOSITORY") {
        config.defaults.repository = Some(repo);
    }

    if let Some(dir) = lookup("SIMDEPLOY_REMOTE_DIR") {
        config.defaults.remote_dir = Some(dir);
    }

    if let Some(val) = lookup("SIMDEPLOY_FORWARD_AGENT") {
        let enabled = parse_bool(&val).ok_or_else(|| ConfigError::InvalidEnv {
            var: "SIMDEPLOY_FORWARD_AGENT".to_string(),
            value: val.clone(),
            expected: "true/false, yes/no, on/off or 1/0".to_string(),
        })?;
        config.defaults.forward_agent = Some(enabled);
    }

    if let Some(program) = lookup("SIMDEPLOY_SSH") {
        if !program.is_empty() {
            config.ssh.program = Some(program);
        }
    }

    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "user",
        "remote_dir",
        "repository",
        "forward_agent",
        "ssh",
        "program",
        "connect_timeout",
        "profiles",
        "name",
        "host",
        "hosts",
        "port",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
