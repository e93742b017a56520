#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::error::Error;
use std::fmt;

use clap::{Args, Parser, Subcommand};
use growth::config::SimulatorConfig;
use growth::report::{ExpectedReport, SimulationReport, TargetReport};
use growth::simulation::ExpectedGrowthModel;
use growth::types::Capacity;
use growth::GrowthSimulator;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Simulate referral network growth.
#[derive(Parser)]
#[command(name = "growth", version)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Print reports as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Values that take precedence over the `GROWTH_*` environment variables.
#[derive(Args)]
struct ConfigOverrides {
    /// Referrers present before the first day.
    #[arg(long, global = true)]
    seed_referrers: Option<u64>,

    /// Referrals allowed per referrer, or `unbounded`.
    #[arg(long, global = true)]
    capacity: Option<Capacity>,

    /// Seed for the random generator.
    #[arg(long, global = true)]
    random_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Cumulative hires for each day.
    Simulate {
        #[arg(long, short)]
        probability: f64,
        #[arg(long, short)]
        days: u64,
    },
    /// First day on which cumulative hires reach a target.
    DaysToTarget {
        #[arg(long, short)]
        probability: f64,
        #[arg(long, short)]
        target: u64,
    },
    /// Expected cumulative hires of the seed cohort, without randomness.
    Expected {
        #[arg(long, short)]
        probability: f64,
        #[arg(long, short)]
        days: u64,
    },
    /// Simulate, then rank referrers by downstream reach.
    Top {
        #[arg(long, short)]
        probability: f64,
        #[arg(long, short)]
        days: u64,
        #[arg(long, short, default_value_t = 10)]
        k: usize,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration from environment variables
    let config = match SimulatorConfig::from_env() {
        Ok(config) => apply_overrides(config, &cli.overrides),
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "Loaded configuration: seed_referrers={}, referral_capacity={}, random_seed={:?}",
        config.seed_referrers,
        config.referral_capacity,
        config.random_seed
    );

    if let Err(e) = run(&cli.command, config, cli.json) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn apply_overrides(mut config: SimulatorConfig, overrides: &ConfigOverrides) -> SimulatorConfig {
    if let Some(count) = overrides.seed_referrers {
        config = config.with_seed_referrers(count);
    }
    if let Some(capacity) = overrides.capacity {
        config = config.with_referral_capacity(capacity);
    }
    if let Some(seed) = overrides.random_seed {
        config = config.with_random_seed(seed);
    }
    config
}

fn run(command: &Command, config: SimulatorConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let simulator = GrowthSimulator::new(config);
    match *command {
        Command::Simulate { probability, days } => {
            let state = simulator.run(probability, days)?;
            print_report(&SimulationReport::from_state(&config, probability, &state, 0), json)
        }
        Command::Top {
            probability,
            days,
            k,
        } => {
            let state = simulator.run(probability, days)?;
            print_report(&SimulationReport::from_state(&config, probability, &state, k), json)
        }
        Command::DaysToTarget {
            probability,
            target,
        } => {
            let days = simulator.days_to_target(probability, target)?;
            print_report(&TargetReport { target, days }, json)
        }
        Command::Expected { probability, days } => {
            let model = ExpectedGrowthModel::new(config.seed_referrers, config.referral_capacity);
            let report = ExpectedReport {
                probability,
                initial_referrers: config.seed_referrers,
                referral_capacity: config.referral_capacity,
                cumulative_hires: model.simulate(probability, days)?,
            };
            print_report(&report, json)
        }
    }
}

fn print_report<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
