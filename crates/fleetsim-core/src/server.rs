//! Server tiers
//!
//! Servers own a bounded set of users, advance them one tick at a time,
//! and report cost and completion so the balancer can retire them.

use crate::user::User;

/// Capability contract for a server tier.
///
/// One concrete tier exists today. Further tiers (different cost curves or
/// capacities) implement this trait and reach the balancer through a new
/// factory without touching the allocation loop.
pub trait Server {
    /// True iff the server has a free slot.
    fn is_available(&self) -> bool;

    /// Admit a user. Admission to a full server silently drops the user;
    /// it is a no-op, not an error.
    fn admit(&mut self, user: User);

    /// Advance one tick: decrement every user's remaining work, charge the
    /// tick, then prune users whose work is gone. Decrement runs before the
    /// prune, so a user reaching exactly zero leaves on the same tick.
    fn advance_one_tick(&mut self);

    /// Cost accumulated so far: elapsed ticks times the per-tick rate.
    fn cost(&self) -> i64;

    /// True iff no user has remaining work. Vacuously true when empty, so
    /// an empty server is always eligible for retirement.
    fn is_finalizing(&self) -> bool;

    /// Number of users currently admitted.
    fn user_count(&self) -> usize;

    /// Allocation ordering key: sum of the users' remaining work minus the
    /// ticks already charged. The balancer fills servers in ascending key
    /// order.
    fn projected_remaining_lifetime(&self) -> i64;
}

/// Tier-One server: fixed capacity, flat rate of one cost unit per tick.
#[derive(Debug)]
pub struct TierOneServer {
    max_capacity: usize,
    cost_per_tick: i64,
    users: Vec<User>,
    elapsed_ticks: i64,
}

impl TierOneServer {
    /// Create an empty server with room for `max_capacity` users.
    pub fn new(max_capacity: usize) -> Self {
        TierOneServer {
            max_capacity,
            cost_per_tick: 1,
            users: Vec::new(),
            elapsed_ticks: 0,
        }
    }

    /// Override the flat per-tick rate.
    pub fn with_cost_per_tick(mut self, cost_per_tick: i64) -> Self {
        self.cost_per_tick = cost_per_tick;
        self
    }
}

impl Server for TierOneServer {
    fn is_available(&self) -> bool {
        self.users.len() < self.max_capacity
    }

    fn admit(&mut self, user: User) {
        if self.is_available() {
            self.users.push(user);
        }
    }

    fn advance_one_tick(&mut self) {
        for user in &mut self.users {
            user.remaining_ticks -= 1;
        }
        self.elapsed_ticks += 1;
        self.users.retain(|u| !u.is_done());
    }

    fn cost(&self) -> i64 {
        self.elapsed_ticks * self.cost_per_tick
    }

    fn is_finalizing(&self) -> bool {
        self.users.iter().all(|u| u.is_done())
    }

    fn user_count(&self) -> usize {
        self.users.len()
    }

    fn projected_remaining_lifetime(&self) -> i64 {
        self.users.iter().map(|u| u.remaining_ticks).sum::<i64>() - self.elapsed_ticks
    }
}
