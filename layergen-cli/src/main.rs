//! layergen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layergen_cli_lib::{observability, CliConfig, GenerateCommand, PreviewCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "layergen")]
#[command(version)]
#[command(about = "Generate repository and service layers for Spring Boot entities", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code and save it as generated-code.zip
    Generate(GenerateCommand),
    /// Show what would be generated without writing anything
    Preview(PreviewCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    }
    .context("Failed to load configuration")?;

    console::set_colors_enabled(config.color);

    match cli.command {
        Commands::Generate(cmd) => {
            cmd.execute(&config)?;
        }
        Commands::Preview(cmd) => {
            cmd.execute(&config)?;
        }
    }

    Ok(())
}
