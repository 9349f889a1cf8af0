//! Common test utilities for simdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with temp directories and a fake `ssh`
//! - Fixtures: Reusable config files and the fake ssh script

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
