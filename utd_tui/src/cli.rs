//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Universal Tower Defense planning tools
#[derive(Parser, Debug)]
#[command(name = "utd_tui")]
#[command(about = "DPS, upgrade cost, team builder and unit browser for Universal Tower Defense")]
#[command(version)]
pub struct Args {
    /// TOML file overriding the tool limits
    #[arg(long, value_name = "LIMITS_FILE")]
    pub config: Option<PathBuf>,

    /// TOML file replacing the built-in unit catalog
    #[arg(long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// TOML file replacing the built-in codes board
    #[arg(long, value_name = "CODES_FILE")]
    pub codes: Option<PathBuf>,

    /// Directory for the log file (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Seed for the sampled DPS runs
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse_args() -> Args {
    Args::parse()
}
