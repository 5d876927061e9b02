//! CLI for the ABL bootstrap loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use abl_core::config;

use commands::{run_fetch, run_startup};

/// Top-level CLI for the ABL bootstrap loader.
#[derive(Debug, Parser)]
#[command(name = "abl")]
#[command(about = "ABL: asynchronous bootstrap-data loader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the startup flow: fetch the bootstrap document, then run the creation step.
    Run {
        /// Override the configured base URL.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Fetch a resource path and pretty-print the JSON document.
    Fetch {
        /// Resource path relative to the base URL (defaults to the configured one).
        path: Option<String>,

        /// Override the configured base URL.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { base_url } => {
                if let Some(url) = base_url {
                    cfg.base_url = url;
                }
                run_startup(&cfg).await?;
            }
            CliCommand::Fetch { path, base_url } => {
                if let Some(url) = base_url {
                    cfg.base_url = url;
                }
                if let Some(path) = path {
                    cfg.resource_path = path;
                }
                run_fetch(&cfg).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
