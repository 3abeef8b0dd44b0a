//! Run command
//!
//! Usage: playground run <ID> [--html <FILE>]

use std::path::PathBuf;

use clap::Args;
use playground_core::SnippetCommand;
use playground_engine::{render_autosubmit_form, RunPayload};

use super::{stored, Engine};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Id of the snippet to run
    pub id: String,

    /// Write a self-submitting HTML page instead of posting directly
    #[arg(long)]
    pub html: Option<PathBuf>,
}

pub async fn execute(args: RunArgs, engine: &mut Engine) -> Result<(), Box<dyn std::error::Error>> {
    let snippet = stored(engine, &args.id)?;

    if let Some(html_path) = args.html {
        let fields = RunPayload::new(&snippet, engine.config())?.form_fields()?;
        let page = render_autosubmit_form(&fields, &engine.config().runner_url);
        std::fs::write(&html_path, page)?;
        println!("✓ Wrote run page to {}", html_path.display());
        return Ok(());
    }

    engine.apply(SnippetCommand::Run { snippet }).await?;
    println!("✓ Sent {} to {}", args.id, engine.config().runner_url);
    Ok(())
}
