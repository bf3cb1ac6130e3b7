//! Factory functions
//!
//! The balancer is wired with these at construction, so swapping in a new
//! server tier never touches the allocation loop.

use crate::server::{Server, TierOneServer};
use crate::user::User;

/// Constructor signature for users: task length in ticks.
pub type UserFactory = fn(u32) -> User;

/// Constructor signature for servers: capacity in users.
pub type ServerFactory = fn(usize) -> Box<dyn Server>;

/// Standard user constructor.
pub fn create_user(ttask: u32) -> User {
    User::new(ttask)
}

/// Tier-One server constructor.
pub fn create_tier_one_server(umax: usize) -> Box<dyn Server> {
    Box::new(TierOneServer::new(umax))
}
