//! Fleetsim Core - Shared domain model
//!
//! This crate defines the pieces the simulation engine schedules:
//! - User: a record of remaining task work
//! - Server trait and the Tier-One implementation
//! - Factory types decoupling the balancer from concrete variants
//!
//! Everything here is total: admission to a full server is a silent no-op
//! and no operation has an error path.

pub mod factory;
pub mod server;
pub mod user;

pub use factory::*;
pub use server::*;
pub use user::*;
