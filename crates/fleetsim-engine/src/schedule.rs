//! Synthetic schedule generation
//!
//! Produces random but reproducible workloads for exercising the balancer
//! without a schedule file: Poisson-distributed arrival counts, with task
//! length and capacity drawn uniformly from configured ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use crate::input::ScheduleInput;

/// Schedule generator with builder-style configuration
pub struct ScheduleGenerator {
    ticks: usize,
    mean_arrivals: f64,
    ttask_range: (u32, u32),
    umax_range: (usize, usize),
    seed: Option<u64>,
}

impl ScheduleGenerator {
    /// Create a generator producing `ticks` arrival entries. Defaults: two
    /// mean arrivals per tick, task lengths of 2..=8, capacities of 2..=4.
    pub fn new(ticks: usize) -> Self {
        ScheduleGenerator {
            ticks,
            mean_arrivals: 2.0,
            ttask_range: (2, 8),
            umax_range: (2, 4),
            seed: None,
        }
    }

    /// Mean number of arrivals per tick (Poisson lambda).
    pub fn with_mean_arrivals(mut self, mean: f64) -> Self {
        self.mean_arrivals = mean;
        self
    }

    /// Inclusive range to draw the task length from.
    pub fn with_ttask_range(mut self, min: u32, max: u32) -> Self {
        self.ttask_range = (min, max);
        self
    }

    /// Inclusive range to draw the server capacity from.
    pub fn with_umax_range(mut self, min: usize, max: usize) -> Self {
        self.umax_range = (min, max);
        self
    }

    /// Fix the RNG seed for reproducible schedules.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a schedule.
    pub fn generate(&self) -> ScheduleInput {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ttask = rng.gen_range(self.ttask_range.0..=self.ttask_range.1);
        let umax = rng.gen_range(self.umax_range.0..=self.umax_range.1);

        let arrivals: Vec<u32> = match Poisson::new(self.mean_arrivals) {
            Ok(poisson) => (0..self.ticks)
                .map(|_| poisson.sample(&mut rng) as u32)
                .collect(),
            // A non-positive lambda means an empty tick stream
            Err(_) => vec![0; self.ticks],
        };

        ScheduleInput {
            ttask,
            umax,
            arrivals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = ScheduleGenerator::new(16).with_seed(42).generate();
        let b = ScheduleGenerator::new(16).with_seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_respects_configured_ranges() {
        for seed in 0..50 {
            let input = ScheduleGenerator::new(8)
                .with_ttask_range(3, 5)
                .with_umax_range(1, 2)
                .with_seed(seed)
                .generate();

            assert!((3..=5).contains(&input.ttask));
            assert!((1..=2).contains(&input.umax));
            assert_eq!(input.arrivals.len(), 8);
        }
    }

    #[test]
    fn test_zero_mean_yields_empty_ticks() {
        let input = ScheduleGenerator::new(4)
            .with_mean_arrivals(0.0)
            .with_seed(7)
            .generate();

        assert_eq!(input.arrivals, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_generated_schedule_round_trips_through_file_format() {
        let input = ScheduleGenerator::new(12).with_seed(9).generate();
        let text = input.to_schedule_file_string();
        let parsed = ScheduleInput::from_reader(text.as_bytes()).unwrap();
        assert_eq!(parsed, input);
    }
}
