//! Store commands: save, list, show, export, delete, delete-all

use std::path::PathBuf;

use clap::Args;
use playground_core::import::fill_defaults;
use playground_core::errors::PlaygroundError;
use playground_core::{codec, identity, Notification, Snippet, SnippetCommand};

use super::{stored, Engine};

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// YAML file holding the snippet
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Snippet id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Snippet id
    pub id: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Save a YAML file; a file without an id creates a new snippet
pub async fn execute_save(
    args: SaveArgs,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.file)?;
    let raw = codec::parse_raw(&text)?.ok_or(PlaygroundError::EmptySnippet)?;
    let mut snippet = fill_defaults(raw, Snippet::defaults(&engine.config().host));

    let command = if snippet.id.is_empty() {
        snippet.id = identity::new_id();
        SnippetCommand::Create {
            snippet: snippet.clone(),
        }
    } else {
        SnippetCommand::Save {
            snippet: snippet.clone(),
        }
    };

    engine.apply(command).await?;
    println!("✓ Saved {} ({})", snippet.name, snippet.id);
    Ok(())
}

pub async fn execute_list(engine: &mut Engine) -> Result<(), Box<dyn std::error::Error>> {
    for notification in engine.apply(SnippetCommand::LoadSnippets).await? {
        if let Notification::SnippetsLoaded { snippets } = notification {
            for snippet in snippets {
                println!("{}\t{}", snippet.id, snippet.name);
            }
        }
    }
    Ok(())
}

pub fn execute_show(args: IdArgs, engine: &Engine) -> Result<(), Box<dyn std::error::Error>> {
    let snippet = stored(engine, &args.id)?;

    println!("id:          {}", snippet.id);
    println!("name:        {}", snippet.name);
    println!("description: {}", snippet.description);
    println!("author:      {}", snippet.author);
    println!("source:      {}", snippet.source);
    if !snippet.gist.is_empty() {
        println!("gist:        {}", snippet.gist);
    }
    println!("script:      {} ({} bytes)", snippet.script.language, snippet.script.content.len());
    println!("style:       {} ({} bytes)", snippet.style.language, snippet.style.content.len());
    println!(
        "template:    {} ({} bytes)",
        snippet.template.language,
        snippet.template.content.len()
    );
    for library in snippet.library_refs() {
        println!("library:     {}", library);
    }
    Ok(())
}

pub fn execute_export(args: ExportArgs, engine: &Engine) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = codec::to_yaml(&stored(engine, &args.id)?)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, yaml)?;
        println!("✓ Exported to {}", output_path.display());
    } else {
        print!("{}", yaml);
    }
    Ok(())
}

pub async fn execute_delete(
    args: IdArgs,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    engine
        .apply(SnippetCommand::Delete {
            id: args.id.clone(),
        })
        .await?;
    println!("✓ Deleted {}", args.id);
    Ok(())
}

pub async fn execute_delete_all(engine: &mut Engine) -> Result<(), Box<dyn std::error::Error>> {
    engine.apply(SnippetCommand::DeleteAll).await?;
    println!("✓ Deleted all snippets for {}", engine.config().host);
    Ok(())
}
