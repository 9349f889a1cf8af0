//! Deploy Module
//!
//! Orchestrates the deployment flow for simdeploy.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`, `FailurePolicy`)
//! - `result` - Result types (`DeployReport`, `HostOutcome`)
//! - `session` - Scoped remote working directory (`RemoteSession`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use simdeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(SshShellFactory::default());
//! let report = use_case.execute(&context, &DeployOptions::default())?;
//! ```

mod options;
mod result;
mod session;
mod use_case;

pub use options::{DeployOptions, FailurePolicy};
pub use result::{DeployReport, HostOutcome, HostStatus};
pub use session::RemoteSession;
pub use use_case::DeployUseCase;
