pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use agroadvisor_core::RawQueryParams;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "agroadvisor",
    about = "Karnataka crop advisory CLI",
    long_about = "Rank crop suggestions for a soil/district/temperature/rainfall query and inspect the catalog, regional reference data, and scoring configuration.",
    after_help = "Examples:\n  agroadvisor recommend --soil-type \"Black Soil\" --district Belagavi --temperature 25 --rainfall 750\n  agroadvisor catalog\n  agroadvisor config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score the catalog against a query and return ranked crop recommendations")]
    Recommend {
        #[arg(long, help = "Soil category, e.g. \"Black Soil\"")]
        soil_type: Option<String>,
        #[arg(long, help = "District name, e.g. \"Belagavi\"")]
        district: Option<String>,
        #[arg(long, help = "Ambient temperature in °C")]
        temperature: Option<String>,
        #[arg(long, help = "Expected rainfall in millimeters")]
        rainfall: Option<String>,
        #[arg(long, help = "JSON catalog file (defaults to the builtin catalog)")]
        catalog: Option<PathBuf>,
        #[arg(long, help = "TOML scoring config file")]
        config: Option<PathBuf>,
    },
    #[command(about = "List and validate the crop catalog")]
    Catalog {
        #[arg(long, help = "JSON catalog file (defaults to the builtin catalog)")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Show the regional soil reference profiles")]
    Soils,
    #[command(about = "List the known district names")]
    Districts,
    #[command(about = "Inspect the effective scoring configuration")]
    Config {
        #[arg(long, help = "TOML scoring config file")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend { soil_type, district, temperature, rainfall, catalog, config } => {
            // The four query parameters stay raw strings here; missing or
            // malformed values are boundary validation errors, not CLI
            // parse errors.
            let params = RawQueryParams { soil_type, district, temperature, rainfall };
            commands::recommend::run(&params, catalog.as_deref(), config.as_deref())
        }
        Command::Catalog { catalog } => commands::catalog::run(catalog.as_deref()),
        Command::Soils => commands::regions::soils(),
        Command::Districts => commands::regions::districts(),
        Command::Config { config } => commands::config::run(config.as_deref()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stderr keeps stdout clean for the JSON payloads
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
