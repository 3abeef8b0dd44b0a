//! Subcommand handlers

pub mod import;
pub mod run;
pub mod snippet;
pub mod templates;

use playground_core::{ContentStore, ImportedSnippet, PlaygroundError, Snippet};
use playground_engine::{PlaygroundConfig, SnippetEngine};
use playground_store::SqliteStore;

pub type Engine = SnippetEngine<SqliteStore>;

/// Open the host-scoped SQLite store and wrap it in an engine
pub fn open_engine(config: PlaygroundConfig) -> Result<Engine, Box<dyn std::error::Error>> {
    let store = SqliteStore::open(&config.database_path, &config.host)?;
    Ok(SnippetEngine::from_config(store, config)?)
}

/// Stored snippet or a not-found error
pub fn stored(engine: &Engine, id: &str) -> Result<Snippet, Box<dyn std::error::Error>> {
    engine
        .store()
        .get(id)?
        .ok_or_else(|| {
            PlaygroundError::SnippetNotFound {
                snippet_id: id.to_string(),
            }
            .into()
        })
}

/// Print an import outcome, optionally saving it
pub async fn report_import(
    imported: ImportedSnippet,
    save: bool,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    let ImportedSnippet { snippet, readonly } = imported;

    if save {
        let id = snippet.id.clone();
        let name = snippet.name.clone();
        engine
            .apply(playground_core::SnippetCommand::Save { snippet })
            .await?;
        println!("✓ Saved {} ({})", name, id);
    } else {
        eprintln!(
            "Imported {} ({}){}",
            snippet.name,
            snippet.id,
            if readonly { " [readonly]" } else { "" }
        );
        print!("{}", playground_core::codec::to_yaml(&snippet)?);
    }

    Ok(())
}
