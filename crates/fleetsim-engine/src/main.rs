//! Fleetsim CLI
//!
//! Runs elastic pool simulations from schedule files and generates
//! synthetic schedules to feed them.
//!
//! Binary: fleetsim

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleetsim_core::{create_tier_one_server, create_user};
use fleetsim_engine::balancer::Balancer;
use fleetsim_engine::input::ScheduleInput;
use fleetsim_engine::schedule::ScheduleGenerator;

/// Fleetsim - elastic server pool simulator
#[derive(Parser)]
#[command(name = "fleetsim")]
#[command(about = "Simulate an elastic server pool over an arrival schedule", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a schedule file
    Run {
        /// Schedule file: task length, capacity, then one arrival count per line
        input: PathBuf,

        /// Write the full report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic schedule
    Generate {
        /// Number of arrival entries
        #[arg(long, default_value_t = 20)]
        ticks: usize,

        /// Mean arrivals per tick (Poisson)
        #[arg(long, default_value_t = 2.0)]
        mean_arrivals: f64,

        /// RNG seed for a reproducible schedule
        #[arg(long)]
        seed: Option<u64>,

        /// Write the schedule to this path instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Simulate the generated schedule immediately
        #[arg(long)]
        simulate: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetsim_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output } => {
            let schedule = ScheduleInput::from_path(&input)
                .with_context(|| format!("loading schedule {}", input.display()))?;
            info!(
                "loaded schedule: ttask={} umax={} arrivals={}",
                schedule.ttask,
                schedule.umax,
                schedule.arrivals.len()
            );

            let mut balancer = Balancer::new(schedule, create_user, create_tier_one_server);
            let report = balancer.run();

            println!("{}", report.render());

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&report)?;
                fs::write(&path, json)
                    .with_context(|| format!("writing report {}", path.display()))?;
                info!("report saved to {}", path.display());
            }
        }
        Commands::Generate {
            ticks,
            mean_arrivals,
            seed,
            out,
            simulate,
        } => {
            let mut generator = ScheduleGenerator::new(ticks).with_mean_arrivals(mean_arrivals);
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }

            let schedule = generator.generate();
            info!(
                "generated schedule: ttask={} umax={} arrivals={}",
                schedule.ttask,
                schedule.umax,
                schedule.arrivals.len()
            );

            if simulate {
                let mut balancer = Balancer::new(schedule, create_user, create_tier_one_server);
                println!("{}", balancer.run().render());
            } else if let Some(path) = out {
                fs::write(&path, schedule.to_schedule_file_string())
                    .with_context(|| format!("writing schedule {}", path.display()))?;
                info!("schedule saved to {}", path.display());
            } else {
                print!("{}", schedule.to_schedule_file_string());
            }
        }
    }

    Ok(())
}
