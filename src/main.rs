//! MSR Backend server binary
//!
//! Loads configuration, installs logging and serves the HTTP API.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use msr_backend::config::Config;
use msr_backend::server;
use msr_backend::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "msr-server", version, about = "MSR Backend HTTP server")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "MSR_CONFIG", default_value = "config/msr.yaml")]
    config: PathBuf,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    // Logging is not up yet, so notices go to stderr
    let config = if cli.config.exists() {
        Config::from_file(&cli.config)
            .await
            .with_context(|| format!("Failed to load {}", cli.config.display()))?
    } else {
        eprintln!(
            "Config file {} not found, using defaults",
            cli.config.display()
        );
        Config::default()
    };

    let mut config = config
        .with_env()
        .context("Invalid environment override")?;
    if let Some(host) = &cli.host {
        config.app.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.app.server.port = port;
    }
    config.validate().context("Invalid command line override")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
