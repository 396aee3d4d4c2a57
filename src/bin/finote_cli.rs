use std::{path::PathBuf, process};

use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;

use finote_core::{
    api::{api_dashboard, api_twin, ScenarioView},
    config::ConfigManager,
    core::{
        normalizer,
        services::ProjectionOptions,
        simulation::{self, CurrentMetrics},
    },
    init,
    utils::{build_info, persistence},
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "finote_cli")]
#[command(about = "Ledger dashboards and twelve-month projections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dashboard aggregates for a snapshot file as JSON
    Dashboard {
        /// Ledger snapshot JSON file
        snapshot: PathBuf,
    },
    /// Print current metrics and all scenario projections as JSON
    Twin {
        /// Ledger snapshot JSON file
        snapshot: PathBuf,

        /// Monthly income to project from instead of the ledger average
        #[arg(long, allow_negative_numbers = true)]
        income: Option<f64>,

        /// Monthly expense to project from instead of the ledger average
        #[arg(long, allow_negative_numbers = true)]
        expense: Option<f64>,

        /// Starting balance instead of the ledger balance
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,
    },
    /// Convert an amount paid at a frequency into its monthly equivalent
    Normalize {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// weekly, monthly, yearly or one-time
        frequency: String,
    },
    /// Project a single scenario from explicit figures
    Scenario {
        /// baseline, optimistic, conservative or aggressive
        key: String,

        #[arg(allow_negative_numbers = true)]
        income: f64,

        #[arg(allow_negative_numbers = true)]
        expense: f64,

        #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
        start: f64,
    },
    /// Print build metadata
    Version,
}

fn main() {
    init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Dashboard { snapshot } => {
            let snapshot = persistence::load_snapshot_from_file(&snapshot)?;
            let config = ConfigManager::from_env().load()?;
            let response = api_dashboard(&snapshot, Utc::now(), &config)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Twin {
            snapshot,
            income,
            expense,
            start,
        } => {
            let overrides = ProjectionOptions {
                monthly_income: income,
                monthly_expense: expense,
                starting_balance: start,
                ..ProjectionOptions::default()
            };
            let snapshot = persistence::load_snapshot_from_file(&snapshot)?;
            let config = ConfigManager::from_env().load()?;
            let response = api_twin(&snapshot, Utc::now(), &config, &overrides)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Normalize { amount, frequency } => {
            let monthly = normalizer::monthly_equivalent_str(amount, &frequency)?;
            println!("{monthly}");
        }
        Commands::Scenario {
            key,
            income,
            expense,
            start,
        } => {
            let metrics = CurrentMetrics::new(income, expense, start);
            let projection = simulation::project_key(&metrics, &key)?;
            println!("{}", serde_json::to_string_pretty(&ScenarioView::from(&projection))?);
        }
        Commands::Version => {
            println!("{}", build_info::current().summary());
        }
    }

    Ok(())
}
