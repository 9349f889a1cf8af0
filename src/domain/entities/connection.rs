//! Connection entity - how to reach a single host

use std::fmt;

/// SSH connection parameters for one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub host: String,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub forward_agent: bool,
    /// Seconds passed to ssh as `ConnectTimeout`
    pub connect_timeout: Option<u64>,
}

impl Connection {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: None,
            port: None,
            forward_agent: true,
            connect_timeout: None,
        }
    }

    /// SSH destination (`user@host` or `host`)
    pub fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.destination(), port),
            None => f.write_str(&self.destination()),
        }
    }
}
