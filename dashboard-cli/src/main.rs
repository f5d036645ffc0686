//! # uptime-dash
//!
//! Renders the static uptime and coverage dashboards to HTML files.
//!
//! ## Usage
//!
//! ```bash
//! # All three variants from the built-in demo data
//! uptime-dash render --out site/
//!
//! # One variant from a data file, with a different window shown selected
//! uptime-dash render --variant coverage --data metrics.json --window "7 days"
//!
//! # Validate a data file
//! uptime-dash check --data metrics.json
//!
//! # Starting point for a data file
//! uptime-dash demo-data > metrics.json
//! ```

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::DashConfig;

#[derive(Parser, Debug)]
#[command(name = "uptime-dash")]
#[command(about = "Render static uptime and coverage dashboards")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Config file (default: ./dashboard.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render dashboards to HTML files
    Render(RenderArgs),
    /// Validate a data file and print a summary
    Check {
        /// JSON data file (default: built-in demo data)
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
    /// Print the built-in demo data as JSON
    DemoData,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Variant to render: uptime-wall, uptime-bars, coverage or all (repeatable)
    #[arg(long, short, value_name = "SLUG")]
    variant: Vec<String>,

    /// JSON data file (default: built-in demo data)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output directory
    #[arg(long, short, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Time window shown as selected
    #[arg(long)]
    window: Option<String>,

    /// Region shown as selected
    #[arg(long)]
    region: Option<String>,
}

fn init_logging(level: &str) {
    // Logs go to stderr, stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(explicit: Option<&PathBuf>) -> Result<DashConfig> {
    match explicit {
        Some(path) => DashConfig::load_explicit(path),
        None => Ok(DashConfig::load(std::path::Path::new("."))),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Render(args) => {
            let plan = commands::RenderPlan::resolve(
                &args.variant,
                args.data,
                args.out,
                args.window,
                args.region,
                &config,
            )?;
            info!(
                variants = plan.variants.len(),
                out = %plan.out_dir.display(),
                "rendering dashboards"
            );
            for path in commands::render(&plan)? {
                println!("{}", path.display());
            }
        }
        Command::Check { data } => {
            let data = commands::load_data(data.or(config.data).as_deref())?;
            println!("{}", commands::summarize(&data));
        }
        Command::DemoData => {
            println!("{}", commands::demo_json()?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[uptime-dash] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
