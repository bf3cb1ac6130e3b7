//! Load balancer and simulation loop
//!
//! Drives the tick cycle: retire drained servers, place the tick's
//! arrivals, snapshot occupancy, advance every server. The cycle order is
//! load-bearing: retirement runs before placement, so a server that
//! drained last tick is never handed this tick's users.

use std::collections::VecDeque;

use tracing::{debug, info};

use fleetsim_core::{Server, ServerFactory, User, UserFactory};

use crate::input::ScheduleInput;
use crate::report::SimulationReport;

/// Elastic pool simulator
pub struct Balancer {
    ttask: u32,
    umax: usize,
    schedule: VecDeque<u32>,
    servers: Vec<Box<dyn Server>>,
    user_factory: UserFactory,
    server_factory: ServerFactory,

    // Metrics
    total_cost: i64,
    users_served: u64,
    peak_servers: usize,
}

impl Balancer {
    /// Create a balancer over a validated schedule, wired to the factories
    /// that produce its users and servers.
    pub fn new(
        input: ScheduleInput,
        user_factory: UserFactory,
        server_factory: ServerFactory,
    ) -> Self {
        Balancer {
            ttask: input.ttask,
            umax: input.umax,
            schedule: input.arrivals.into(),
            servers: Vec::new(),
            user_factory,
            server_factory,
            total_cost: 0,
            users_served: 0,
            peak_servers: 0,
        }
    }

    /// Run the simulation until the pool drains.
    ///
    /// The loop always performs at least one tick and exits after any tick
    /// that ends with no active servers. An exhausted schedule feeds zero
    /// arrivals, so a pool still holding work keeps ticking to completion.
    pub fn run(&mut self) -> SimulationReport {
        let mut tick_occupancy = Vec::new();

        loop {
            let arrivals = self.next_arrival_count();
            tick_occupancy.push(self.tick(arrivals));

            if self.servers.is_empty() {
                break;
            }
        }

        info!(
            "simulation drained: {} ticks, {} users, total cost {}",
            tick_occupancy.len(),
            self.users_served,
            self.total_cost
        );

        SimulationReport {
            tick_occupancy,
            total_cost: self.total_cost,
            users_served: self.users_served,
            peak_servers: self.peak_servers,
        }
    }

    fn next_arrival_count(&mut self) -> u32 {
        self.schedule.pop_front().unwrap_or(0)
    }

    /// One tick: retire, place arrivals, snapshot, advance. The snapshot is
    /// taken before the advance, so it reflects what each server held while
    /// the tick's work ran.
    fn tick(&mut self, arrivals: u32) -> Vec<u32> {
        self.retire_finalizing();
        self.place_arrivals(arrivals);

        let occupancy = self
            .servers
            .iter()
            .map(|s| s.user_count() as u32)
            .collect();

        for server in &mut self.servers {
            server.advance_one_tick();
        }

        occupancy
    }

    /// Retire every server with no remaining work, folding its cost into
    /// the running total. Survivors keep their relative order.
    fn retire_finalizing(&mut self) {
        let total = &mut self.total_cost;
        self.servers.retain(|server| {
            if server.is_finalizing() {
                let cost = server.cost();
                debug!("retiring server, booking cost {}", cost);
                *total += cost;
                false
            } else {
                true
            }
        });
    }

    /// Create and place `count` users, each into the first available
    /// server in ascending projected-lifetime order, spawning a fresh
    /// server whenever every active one is full.
    fn place_arrivals(&mut self, count: u32) {
        for _ in 0..count {
            let user = (self.user_factory)(self.ttask);
            self.admit_user(user);
            self.users_served += 1;
        }
        self.peak_servers = self.peak_servers.max(self.servers.len());
    }

    fn admit_user(&mut self, user: User) {
        // Each user gets a freshly sorted view: admitting shifts the
        // projected lifetime. The stable sort keeps creation order between
        // equal keys; the server list itself stays in creation order.
        let mut order: Vec<usize> = (0..self.servers.len()).collect();
        order.sort_by_key(|&i| self.servers[i].projected_remaining_lifetime());

        let target = order.into_iter().find(|&i| self.servers[i].is_available());
        match target {
            Some(i) => self.servers[i].admit(user),
            None => {
                let mut server = (self.server_factory)(self.umax);
                server.admit(user);
                self.servers.push(server);
                debug!("spawned server, pool size {}", self.servers.len());
            }
        }
    }
}
