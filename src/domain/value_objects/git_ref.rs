//! Git ref value object - the branch, tag or commit to check out

use std::fmt;
use std::str::FromStr;

use crate::error::DeployError;

/// Ref checked out when none is given
pub const DEFAULT_REF: &str = "master";

/// A validated git reference (branch name, tag or commit)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitRef(String);

impl GitRef {
    /// Validate and wrap a ref name.
    ///
    /// Rejects empty names, whitespace, and a leading `-` (which git would
    /// read as an option).
    pub fn new(name: impl Into<String>) -> Result<Self, DeployError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeployError::config("ref must not be empty"));
        }
        if name.starts_with('-') {
            return Err(DeployError::config(format!(
                "ref '{}' must not start with '-'",
                name
            )));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DeployError::config(format!(
                "ref '{}' must not contain whitespace",
                name
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GitRef {
    fn default() -> Self {
        Self(DEFAULT_REF.to_string())
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GitRef {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
