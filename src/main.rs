//! brewkit: recipe statistics, priming and BeerXML conversion from the command line.
//!
//! ```bash
//! # Gravity, bitterness and colour of a recipe (JSON or BeerXML)
//! brewkit stats recipe.json --alpha Cascade=6.8
//!
//! # What a BeerXML file contains, as JSON
//! brewkit import shared.xml
//!
//! # Recipe JSON (or a library backup with --library) to BeerXML
//! brewkit export recipe.json > recipe.xml
//!
//! # Quick calculations
//! brewkit abv --og 1.052 --fg 1.011
//! brewkit priming --co2 2.6 --volume 19 --sugar glucose
//! ```

mod commands;
mod error;
mod input;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use brewkit_calc::AlphaOverrides;
use brewkit_config::Config;
use brewkit_recipe::models::SugarType;
use clap::{Parser, Subcommand};
use exn::ResultExt;
use tracing_subscriber::EnvFilter;

use crate::error::{ErrorKind, Result};

#[derive(Debug, Parser)]
#[command(name = "brewkit", version, about = "Home-brew recipe calculator and BeerXML converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to brewkit.toml in the platform config directory)
    #[arg(long, global = true, env = "BREWKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print OG, FG, ABV, IBU and colour for each recipe in a JSON or BeerXML file
    Stats {
        /// Recipe file, or `-` for standard input
        file: PathBuf,

        /// Replace a hop's alpha acid, e.g. `--alpha Cascade=6.8` (repeatable)
        #[arg(long, value_name = "NAME=PCT", value_parser = input::parse_alpha)]
        alpha: Vec<(String, f64)>,
    },

    /// Parse a BeerXML file and print its recipes and ingredients as JSON
    Import {
        /// BeerXML file, or `-` for standard input
        file: PathBuf,
    },

    /// Convert recipe JSON to BeerXML
    Export {
        /// Recipe JSON (one object or an array), or `-` for standard input
        file: PathBuf,

        /// Treat the input as an ingredient library backup
        #[arg(long)]
        library: bool,
    },

    /// Alcohol by volume from gravity readings
    Abv {
        /// Original gravity
        #[arg(long)]
        og: f64,

        /// Final gravity
        #[arg(long)]
        fg: f64,

        /// Grams of priming sugar, for bottled beer
        #[arg(long)]
        sugar: Option<f64>,

        /// Liters bottled (defaults to the configured volume)
        #[arg(long)]
        volume: Option<f64>,
    },

    /// Grams of priming sugar needed to carbonate a batch
    Priming {
        /// Target carbonation in volumes of CO2
        #[arg(long)]
        co2: Option<f64>,

        /// Liters to bottle
        #[arg(long)]
        volume: Option<f64>,

        /// Highest temperature the beer reached after fermentation, in Celsius
        #[arg(long)]
        temp: Option<f64>,

        /// table_sugar, glucose or dme
        #[arg(long)]
        sugar: Option<SugarType>,
    },

    /// Summarize a brew log entry against its recipe
    Log {
        /// Brew log entry JSON
        entry: PathBuf,

        /// Recipe JSON or BeerXML; the recipe matching the entry's recipe id is used
        recipe: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    tracing::debug!(?config, "configuration loaded");
    let output = match cli.command {
        Command::Stats { file, alpha } => {
            let overrides: AlphaOverrides = alpha.into_iter().collect();
            commands::stats(&input::read(&file)?, &overrides)?
        },
        Command::Import { file } => commands::import(&input::read(&file)?, &file.display().to_string())?,
        Command::Export { file, library } => commands::export(&input::read(&file)?, library, &config)?,
        Command::Abv { og, fg, sugar, volume } => commands::abv_report(og, fg, sugar, volume, &config.priming),
        Command::Priming { co2, volume, temp, sugar } => {
            commands::priming_report(co2, volume, temp, sugar, &config.priming)
        },
        Command::Log { entry, recipe } => {
            commands::log_report(&input::read(&entry)?, &input::read(&recipe)?, &config.priming)?
        },
    };
    writeln!(std::io::stdout().lock(), "{output}").or_raise(|| ErrorKind::Output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
