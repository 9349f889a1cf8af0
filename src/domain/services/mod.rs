//! Domain Services
//!
//! Stateless logic shared by the application layer.

pub mod git_commands;

pub use git_commands::{in_dir, shell_quote, shell_quote_path};
