//! Pipesync CLI
//!
//! Publishes a local pipeline description to Sophos Factory.
//!
//! Architecture:
//! - Configuration: flags with environment fallbacks, validated once
//! - Services: resolve-or-create pipeline, publish revision, trigger run
//! - Workflow: runs the services in order and stops at the first failure
//!
//! The `sync` command performs the full publish; `render` prints the
//! revision payload without contacting the service.

mod commands;
mod config;
mod logging;
mod service;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use tracing::error;

#[derive(Parser)]
#[command(name = "pipesync")]
#[command(about = "Publish pipeline descriptions to Sophos Factory", long_about = None)]
struct Cli {
    /// Log level (debug, info, warning, error)
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warning")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(logging::parse_level(&cli.log_level)?);

    Ok(report(handle_command(cli.command).await))
}

/// Log a command failure once and turn it into the process exit code
fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
