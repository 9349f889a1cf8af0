//! Domain Entities
//!
//! - `TargetProfile` - A named deployment target from the profile table
//! - `DeploymentContext` - Process defaults plus the currently selected target
//! - `Connection` - How to reach one host of a target

mod connection;
mod context;
mod profile;

pub use connection::Connection;
pub use context::{Defaults, DeploymentContext, ResolvedTarget};
pub use profile::TargetProfile;
