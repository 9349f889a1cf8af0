//! Host set value object - the ordered hosts a profile deploys to

use crate::error::ConfigError;

/// Ordered, non-empty list of hostnames.
///
/// Deployment visits hosts in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostSet(Vec<String>);

impl HostSet {
    /// A set with one host
    pub fn single(host: impl Into<String>) -> Self {
        Self(vec![host.into()])
    }

    /// Build a set from host patterns, expanding any `{a..b}` range in order
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hosts = Vec::new();
        for pattern in patterns {
            hosts.extend(expand_host_pattern(pattern.as_ref())?);
        }
        Ok(Self(hosts))
    }

    pub fn hosts(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Largest number of hosts a single range may produce
pub const MAX_RANGE_HOSTS: u32 = 1024;

/// Expand a single numeric range in a hostname.
///
/// `sim40{1..5}.ee.kth.se` becomes `sim401.ee.kth.se` .. `sim405.ee.kth.se`.
/// A zero-padded start (`node{01..12}`) keeps its width. Patterns without
/// braces are returned unchanged. Host names may not be empty, contain
/// whitespace, or start with `-` (ssh would read that as an option).
pub fn expand_host_pattern(pattern: &str) -> Result<Vec<String>, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidHostPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if pattern.is_empty() {
        return Err(invalid("host name is empty"));
    }
    if pattern.starts_with('-') {
        return Err(invalid("host name must not start with '-'"));
    }
    if pattern.chars().any(char::is_whitespace) {
        return Err(invalid("host name must not contain whitespace"));
    }

    let Some(open) = pattern.find('{') else {
        if pattern.contains('}') {
            return Err(invalid("unmatched '}'"));
        }
        return Ok(vec![pattern.to_string()]);
    };
    let close = pattern[open..]
        .find('}')
        .map(|i| open + i)
        .ok_or_else(|| invalid("unmatched '{'"))?;

    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];
    if suffix.contains('{') || suffix.contains('}') {
        return Err(invalid("only one range is supported"));
    }

    let (start_str, end_str) = body
        .split_once("..")
        .ok_or_else(|| invalid("expected '{start..end}'"))?;
    let start: u32 = start_str
        .parse()
        .map_err(|_| invalid("range start is not a number"))?;
    let end: u32 = end_str
        .parse()
        .map_err(|_| invalid("range end is not a number"))?;
    if start > end {
        return Err(invalid("range start is greater than range end"));
    }
    if end - start >= MAX_RANGE_HOSTS {
        return Err(invalid(&format!(
            "range expands to more than {} hosts",
            MAX_RANGE_HOSTS
        )));
    }

    let width = if start_str.len() > 1 && start_str.starts_with('0') {
        start_str.len()
    } else {
        0
    };

    Ok((start..=end)
        .map(|n| format!("{}{:0width$}{}", prefix, n, suffix, width = width))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_host_is_unchanged() {
        assert_eq!(
            expand_host_pattern("sim401.ee.kth.se").unwrap(),
            vec!["sim401.ee.kth.se"]
        );
    }

    #[test]
    fn expands_numeric_suffix_range_in_order() {
        assert_eq!(
            expand_host_pattern("sim40{1..5}.ee.kth.se").unwrap(),
            vec![
                "sim401.ee.kth.se",
                "sim402.ee.kth.se",
                "sim403.ee.kth.se",
                "sim404.ee.kth.se",
                "sim405.ee.kth.se",
            ]
        );
    }

    #[test]
    fn keeps_zero_padding() {
        assert_eq!(
            expand_host_pattern("node{08..10}").unwrap(),
            vec!["node08", "node09", "node10"]
        );
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(expand_host_pattern("h{5..1}").is_err());
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(expand_host_pattern("h{1..3").is_err());
        assert!(expand_host_pattern("h1..3}").is_err());
    }

    #[test]
    fn rejects_second_range() {
        assert!(expand_host_pattern("r{1..2}n{1..2}").is_err());
    }

    #[test]
    fn host_set_preserves_listed_order() {
        let set = HostSet::from_patterns(["b.example", "a{1..2}.example"]).unwrap();
        assert_eq!(set.hosts(), &["b.example", "a1.example", "a2.example"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn rejects_option_like_host() {
        let err = expand_host_pattern("-oProxyCommand=touch /tmp/x").unwrap_err();
        assert!(err.to_string().contains("must not start with '-'"));
        assert!(HostSet::from_patterns(["ok.example", "-p22"]).is_err());
    }

    #[test]
    fn rejects_empty_or_spaced_host() {
        assert!(expand_host_pattern("").is_err());
        assert!(expand_host_pattern("sim401 sim402").is_err());
    }

    #[test]
    fn caps_range_size() {
        assert!(expand_host_pattern("h{0..4000000000}").is_err());
        assert!(expand_host_pattern("h{1..1025}").is_err());
        assert_eq!(expand_host_pattern("h{1..1024}").unwrap().len(), 1024);
    }
}
