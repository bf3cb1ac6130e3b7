//! Simulation report
//!
//! Collects per-tick occupancy and the final cost, serializable for the
//! JSON output and renderable as the plain text block the CLI prints.

use serde::{Deserialize, Serialize};

/// Result of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-server active user counts for every tick, in server creation
    /// order. Ticks with no active servers keep an empty row here; those
    /// rows render to nothing.
    pub tick_occupancy: Vec<Vec<u32>>,
    /// Cost folded in from every retired server.
    pub total_cost: i64,
    /// Users admitted over the whole run.
    pub users_served: u64,
    /// Largest number of concurrently active servers.
    pub peak_servers: usize,
}

impl SimulationReport {
    /// Render the text block: one comma-joined occupancy line per
    /// non-empty tick, then the total cost on the last line.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .tick_occupancy
            .iter()
            .filter(|counts| !counts.is_empty())
            .map(|counts| {
                counts
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();

        lines.push(self.total_cost.to_string());
        lines.join("\n")
    }

    /// Number of ticks simulated, including drained trailing ticks.
    pub fn ticks(&self) -> usize {
        self.tick_occupancy.len()
    }
}
