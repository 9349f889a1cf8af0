//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod git_ref;
mod host_set;

pub use git_ref::GitRef;
pub use host_set::{expand_host_pattern, HostSet};
