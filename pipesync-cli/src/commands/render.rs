//! Render command handler

use anyhow::{Context, Result};
use clap::Args;
use pipesync_core::dto::revision::CreateRevision;
use pipesync_core::{FsScriptLoader, build_steps};

use super::{SourceArgs, load_description};

/// Arguments of `pipesync render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
}

/// Handle `pipesync render`
pub fn handle_render_command(args: RenderArgs) -> Result<()> {
    let revision = render_revision(&args.source)?;
    println!("{}", serde_json::to_string_pretty(&revision)?);
    Ok(())
}

/// Build the revision request `sync` would send for `source`
fn render_revision(source: &SourceArgs) -> Result<CreateRevision> {
    let description = load_description(&source.description)?;
    let loader = FsScriptLoader::new(&source.scripts);
    let steps = build_steps(&description, &loader).context("Failed to build pipeline steps")?;

    Ok(CreateRevision::new(source.comment.clone(), steps))
}
