//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT spawn processes itself (that is Infrastructure)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Brings each host of the selected target to a git ref

pub mod deploy;

pub use deploy::{
    DeployOptions, DeployReport, DeployUseCase, FailurePolicy, HostOutcome, HostStatus,
    RemoteSession,
};
