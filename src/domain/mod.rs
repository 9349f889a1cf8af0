//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Target profiles and the deployment context
//! - `value_objects/` - Immutable value types (GitRef, HostSet)
//! - `services/` - Remote command construction
//! - `ports/` - Interface definitions for infrastructure (remote shell, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Explicit context** - The selected target is passed around, never global
//! 3. **Ports & Adapters** - All remote execution goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
