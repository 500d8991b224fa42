//! Sync command handler

use anyhow::Result;
use clap::Args;
use colored::*;
use pipesync_client::{ClientError, DEFAULT_API_URL, FactoryClient};
use pipesync_core::FsScriptLoader;
use tracing::{debug, info};

use super::{SourceArgs, load_description};
use crate::config::SyncConfig;
use crate::workflow::{SyncOutcome, SyncWorkflow};

/// Arguments of `pipesync sync`
#[derive(Args)]
pub struct SyncArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Factory project id
    #[arg(short, long, env = "PROJECT_ID")]
    project: String,

    /// Name of the remote pipeline
    #[arg(short, long, env = "PIPELINE_NAME")]
    name: String,

    /// Factory API access token
    #[arg(long, env = "AUTH_TOKEN_NAME", hide_env_values = true)]
    token: String,

    /// Factory API base URL
    #[arg(long, env = "FACTORY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl From<SyncArgs> for SyncConfig {
    fn from(args: SyncArgs) -> Self {
        Self {
            description_path: args.source.description,
            script_dir: args.source.scripts,
            api_url: args.api_url,
            project_id: args.project,
            pipeline_name: args.name,
            comment: args.source.comment,
            auth_token: args.token,
        }
    }
}

/// Handle `pipesync sync`
///
/// Configuration and the description are checked before any remote call.
pub async fn handle_sync_command(args: SyncArgs) -> Result<()> {
    let config = SyncConfig::from(args);
    config.validate()?;
    debug!("{:?}", config);

    let description = load_description(&config.description_path)?;
    info!("Project id = {}", config.project_id);

    let client = FactoryClient::new(&config.api_url, &config.project_id, config.auth_token.clone());
    let loader = FsScriptLoader::new(&config.script_dir);

    let outcome = SyncWorkflow::new(&client, &loader)
        .run(&config.pipeline_name, &config.comment, &description)
        .await
        .map_err(|e| {
            if let Some(status) = e.client_error().and_then(ClientError::status) {
                debug!("Remote call failed with status {}", status);
            }
            let stage = e.stage();
            anyhow::Error::new(e).context(format!(
                "Sync of '{}' stopped at the {} stage",
                config.pipeline_name, stage
            ))
        })?;

    print_outcome(&config, &outcome);
    Ok(())
}

fn print_outcome(config: &SyncConfig, outcome: &SyncOutcome) {
    println!("{}", "✓ Pipeline revision published and started!".green().bold());
    let state = if outcome.pipeline.was_created() {
        "created"
    } else {
        "existing"
    };
    println!(
        "  Pipeline: {} {} {}",
        config.pipeline_name.bold(),
        outcome.pipeline.id().to_string().cyan(),
        format!("({})", state).dimmed()
    );
    println!(
        "  Revision: {} {}",
        outcome.revision_id.to_string().cyan(),
        format!("({} step(s))", outcome.step_count).dimmed()
    );
    match &outcome.run.id {
        Some(run_id) => println!("  Run:      {}", run_id.to_string().cyan()),
        None => println!("  Run:      {}", "accepted".yellow()),
    }
}
