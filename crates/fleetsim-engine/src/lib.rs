//! Fleetsim Engine
//!
//! Tick-driven simulator for an elastic server pool: admits users from an
//! arrival schedule, retires drained servers, accumulates running cost, and
//! reports per-tick occupancy.

pub mod balancer;
pub mod error;
pub mod input;
pub mod report;
pub mod schedule;
