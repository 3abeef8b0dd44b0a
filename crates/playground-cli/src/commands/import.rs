//! Import and duplicate commands
//!
//! Usage: playground import <INPUT> [--suffix <S>] [--save]
//!        playground duplicate <ID> [--save]

use clap::Args;
use playground_core::{Notification, SnippetCommand};

use super::{report_import, Engine};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snippet id, gist URL or hash, YAML URL, inline YAML, or `default`
    pub input: String,

    /// Disambiguating suffix for name collisions
    #[arg(long)]
    pub suffix: Option<String>,

    /// Save the result instead of printing it
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Args)]
pub struct DuplicateArgs {
    /// Id of the snippet to copy
    pub id: String,

    /// Save the copy instead of printing it
    #[arg(long)]
    pub save: bool,
}

pub async fn execute(
    args: ImportArgs,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = engine
        .apply(SnippetCommand::Import {
            input: Some(args.input.clone()),
            suffix: args.suffix,
        })
        .await?;

    match imported(notifications) {
        Some(imported) => report_import(imported, args.save, engine).await,
        None => Err(format!("Nothing could be imported from {}", args.input).into()),
    }
}

pub async fn execute_duplicate(
    args: DuplicateArgs,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = engine
        .apply(SnippetCommand::Duplicate { id: args.id.clone() })
        .await?;

    match imported(notifications) {
        Some(copy) => report_import(copy, args.save, engine).await,
        None => Err(format!("Could not duplicate {}", args.id).into()),
    }
}

fn imported(notifications: Vec<Notification>) -> Option<playground_core::ImportedSnippet> {
    notifications.into_iter().find_map(|n| match n {
        Notification::ImportSucceeded { snippet, readonly } => {
            Some(playground_core::ImportedSnippet { snippet, readonly })
        }
        _ => None,
    })
}
