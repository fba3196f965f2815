mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yachtdir_core::Coordinates;
use yachtdir_search::CategorySearch;

#[derive(Debug, Parser)]
#[command(name = "yachtdir-cli")]
#[command(about = "Query and audit the superyacht vendor directory")]
struct Cli {
    /// Vendor directory YAML file
    #[arg(
        long,
        global = true,
        env = "YACHTDIR_DIRECTORY_PATH",
        default_value = "./config/directory.yaml"
    )]
    directory: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Vendors with an eligible location within the radius, nearest first
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value = "100")]
        radius_km: f64,
    },
    /// Vendors supplying products in a category
    Category {
        category: String,
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
        /// Vendor ID to leave out, usually the one being viewed
        #[arg(long)]
        exclude: Option<String>,
        #[arg(long, default_value = "500")]
        radius_km: f64,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Check every vendor's locations and tier allowance
    Validate,
    /// Print the vendor sheet for a tier, or `admin` for every column
    Export {
        #[arg(long)]
        tier: String,
    },
    /// Strip fields above a tier from a JSON update payload
    Sanitize {
        #[arg(long)]
        tier: String,
        /// JSON object to sanitize
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level = std::env::var("YACHTDIR_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("yachtdir-cli: run with --help to list commands");
        return Ok(());
    };

    let directory = || commands::load(&cli.directory);
    match command {
        Commands::Nearby {
            lat,
            lon,
            radius_km,
        } => commands::run_nearby(&directory()?, lat, lon, radius_km),
        Commands::Category {
            category,
            lat,
            lon,
            exclude,
            radius_km,
            limit,
        } => {
            let mut search = CategorySearch::new(category)
                .within(radius_km)
                .limit(limit);
            if let (Some(lat), Some(lon)) = (lat, lon) {
                search = search.near(Coordinates::new(lat, lon));
            }
            if let Some(id) = exclude {
                search = search.excluding(id);
            }
            commands::run_category(&directory()?, &search)
        }
        Commands::Validate => commands::run_validate(&directory()?),
        Commands::Export { tier } => commands::run_export(&directory()?, &tier),
        Commands::Sanitize { tier, file } => commands::run_sanitize(&tier, &file),
    }
}

#[cfg(test)]
mod tests;
