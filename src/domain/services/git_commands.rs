//! Remote command construction
//!
//! Builds the exact shell lines sent to a deployment host. Arguments are
//! left bare when they only contain shell-safe characters so that the
//! commands read the same as a human would type them.

/// Quote `s` for a POSIX shell, leaving it bare when that is safe
pub fn shell_quote(s: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_-./:@%+=,".contains(c);
    if !s.is_empty() && s.chars().all(is_safe) {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Quote a remote path, keeping a leading `~` unquoted so the remote shell
/// still expands it to the login's home directory
pub fn shell_quote_path(path: &str) -> String {
    if path == "~" {
        return path.to_string();
    }
    match path.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(path),
    }
}

/// Prefix `command` so it runs inside `dir`
pub fn in_dir(dir: &str, command: &str) -> String {
    format!("cd {} && {}", shell_quote_path(dir), command)
}

pub fn test_dir(path: &str) -> String {
    format!("test -d {}", shell_quote_path(path))
}

pub fn mkdir_p(path: &str) -> String {
    format!("mkdir -p {}", shell_quote_path(path))
}

pub fn git_clone(repository: &str, path: &str) -> String {
    format!(
        "git clone {} {}",
        shell_quote(repository),
        shell_quote_path(path)
    )
}

pub fn git_fetch() -> String {
    "git fetch".to_string()
}

pub fn git_checkout(git_ref: &str) -> String {
    format!("git checkout {}", shell_quote(git_ref))
}

pub fn git_pull() -> String {
    "git pull".to_string()
}
