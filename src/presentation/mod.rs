//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use simdeploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&settings, false);
//! let report = use_case.execute(&context, &options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::create_deploy_use_case;
