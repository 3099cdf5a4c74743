//! Command-line front end for the survival calculator.
//!
//! Results go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use u_survival::config::SurvivalConfig;
use u_survival::params::ParameterStore;
use u_survival::survival::{LocationType, Scenario, SurvivalCalculator};

#[derive(Parser, Debug)]
#[command(name = "u-survival", version, about = "Weibull AFT failure probability and median time-to-failure")]
struct Cli {
    /// Fitted parameter snapshot (JSON)
    #[arg(long, env = "U_SURVIVAL_PARAMS")]
    params: PathBuf,

    /// Covariate key / horizon config (TOML)
    #[arg(long, env = "U_SURVIVAL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Median time-to-failure and failure probability per horizon
    Evaluate {
        #[arg(long)]
        component: String,
        #[arg(long, default_value = "Overall")]
        location: LocationType,
        /// Raw usage rate; omitted means the population mean
        #[arg(long)]
        usage: Option<f64>,
        /// Horizon in days (repeatable); defaults to the configured horizons
        #[arg(long = "horizon")]
        horizons: Vec<f64>,
    },
    /// Median time-to-failure only
    Median {
        #[arg(long)]
        component: String,
        #[arg(long, default_value = "Overall")]
        location: LocationType,
        #[arg(long)]
        usage: Option<f64>,
    },
    /// List component keys in the snapshot
    Components,
    /// Median time-to-failure for every component and location
    Compare {
        #[arg(long)]
        usage: Option<f64>,
        /// Location (repeatable); defaults to all
        #[arg(long = "location")]
        locations: Vec<LocationType>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => SurvivalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SurvivalConfig::default(),
    };
    let store = ParameterStore::from_json_file(&cli.params, &config.covariates)
        .with_context(|| format!("loading parameters {}", cli.params.display()))?;
    let calc = SurvivalCalculator::new(&store);

    match cli.command {
        Command::Evaluate {
            component,
            location,
            usage,
            horizons,
        } => {
            let horizons = if horizons.is_empty() {
                config.horizons.days.clone()
            } else {
                horizons
            };
            let scenario = Scenario {
                usage_rate: usage,
                location,
            };
            let result = calc.evaluate(&component, &scenario, &horizons)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Median {
            component,
            location,
            usage,
        } => {
            let scenario = Scenario {
                usage_rate: usage,
                location,
            };
            let median = calc.median_only(&component, &scenario)?;
            println!("{median}");
        }
        Command::Components => {
            for component in store.components() {
                println!("{component}");
            }
        }
        Command::Compare { usage, locations } => {
            let locations = if locations.is_empty() {
                LocationType::ALL.to_vec()
            } else {
                locations
            };
            let rows = calc.median_comparison(&locations, usage)?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
