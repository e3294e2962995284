//! Solar System Weather Forecaster
//!
//! This binary simulates the Ferengi, Betasoide and Vulcano system (or any
//! system described in a JSON configuration file) and reports its weather.
//!
//! Usage:
//!   cargo run --bin forecaster -- report
//!   cargo run --bin forecaster -- predict --day 566
//!   cargo run --bin forecaster -- export --output predictions.json
//!
//! Set `RUST_LOG=debug` to follow season changes.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use orrery::{
    ForecastError, InMemoryPredictionStore, PredictionStore, Simulation, SimulationConfig,
};
use tracing_subscriber::EnvFilter;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Solar System Weather Forecaster
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Predicts drought, rain and optimal seasons from planetary alignment",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    system: SystemArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SystemArgs {
    /// JSON configuration file; the reference system is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// First simulated date (YYYY-MM-DD), defaults to today
    #[arg(short, long, global = true)]
    start_date: Option<NaiveDate>,

    /// Simulated years, end date included
    #[arg(short, long, global = true)]
    years: Option<u32>,

    /// Simulated days, overriding --years
    #[arg(long, global = true)]
    days: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count drought, rain and optimal seasons and list rain picks
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the weather for a single day
    Predict {
        /// Day number, counting from 0
        #[arg(short, long, allow_negative_numbers = true)]
        day: i64,
    },
    /// Write the weather of every day as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl SystemArgs {
    fn load(&self) -> Result<SimulationConfig> {
        let start_date = self
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());

        let mut config = match &self.config {
            Some(path) => SimulationConfig::load_from_path(path)?,
            None => SimulationConfig::reference(start_date),
        };
        if let Some(date) = self.start_date {
            config.start_date = date;
        }
        if let Some(years) = self.years {
            config.years = years;
        }
        if self.days.is_some() {
            config.days = self.days;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Converts the `--day` argument, which clap accepts as negative
fn required_day(day: i64) -> orrery::Result<u64> {
    u64::try_from(day).map_err(|_| {
        ForecastError::InvalidArgument("The required day must not be negative.".to_string())
    })
}

fn populate(config: &SimulationConfig) -> Result<InMemoryPredictionStore> {
    let mut store = InMemoryPredictionStore::new();
    Simulation::new(config)?.populate(&mut store)?;
    Ok(store)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.system.load()?;

    match cli.command {
        Command::Report { json } => {
            let report = Simulation::new(&config)?.run()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Command::Predict { day } => {
            let day = required_day(day)?;
            let prediction = populate(&config)?.find_by_day(day)?;
            println!("Day {}: {}", prediction.day, prediction.condition);
        }
        Command::Export { output } => {
            let store = populate(&config)?;
            match output {
                Some(path) => {
                    store.save_json(&path)?;
                    println!("Saved {} predictions to {}", store.len(), path.display());
                }
                None => {
                    let predictions: Vec<_> = store.iter().collect();
                    println!("{}", serde_json::to_string_pretty(&predictions)?);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_arguments() {
        let cli = Cli::try_parse_from(["forecaster", "predict", "--day", "566"]).unwrap();
        assert!(matches!(cli.command, Command::Predict { day: 566 }));

        let cli = Cli::try_parse_from(["forecaster", "predict", "-d", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Predict { day: -1 }));

        assert!(Cli::try_parse_from(["forecaster", "predict"]).is_err());
    }

    #[test]
    fn test_negative_day_is_rejected() {
        assert_eq!(required_day(0).unwrap(), 0);
        assert_eq!(required_day(566).unwrap(), 566);
        assert!(matches!(
            required_day(-1),
            Err(ForecastError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_global_system_arguments() {
        let cli = Cli::try_parse_from([
            "forecaster",
            "report",
            "--json",
            "--start-date",
            "2026-01-01",
            "--years",
            "1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Report { json: true }));

        let config = cli.system.load().unwrap();
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(config.years, 1);
        assert_eq!(config.horizon_days().unwrap(), 366);
        assert_eq!(config.planets.len(), 3);
    }

    #[test]
    fn test_days_override_and_export_output() {
        let cli = Cli::try_parse_from([
            "forecaster",
            "--days",
            "30",
            "export",
            "-o",
            "predictions.json",
        ])
        .unwrap();
        let Command::Export { output } = &cli.command else {
            panic!("expected the export command");
        };
        assert_eq!(output.as_deref(), Some(std::path::Path::new("predictions.json")));
        assert_eq!(cli.system.load().unwrap().horizon_days().unwrap(), 30);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from([
            "forecaster",
            "report",
            "--config",
            "/nonexistent/orrery.json",
        ])
        .unwrap();
        assert!(cli.system.load().is_err());
    }
}
