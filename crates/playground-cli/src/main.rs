//! Snippet Playground CLI
//!
//! Command-line interface for importing, storing and running snippets

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use playground_core::logging_facility;
use playground_engine::PlaygroundConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "playground")]
#[command(about = "Snippet Playground - import, store and run snippets", long_about = None)]
struct Cli {
    /// Host application tag (overrides configuration)
    #[arg(long, global = true)]
    host: Option<String>,

    /// SQLite store path (overrides configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import a snippet from an id, gist, URL, inline YAML or `default`
    Import(commands::import::ImportArgs),
    /// Save a snippet from a YAML file
    Save(commands::snippet::SaveArgs),
    /// List stored snippets
    List,
    /// Show a stored snippet
    Show(commands::snippet::IdArgs),
    /// Export a stored snippet as YAML
    Export(commands::snippet::ExportArgs),
    /// Duplicate a stored snippet
    Duplicate(commands::import::DuplicateArgs),
    /// Delete a stored snippet
    Delete(commands::snippet::IdArgs),
    /// Delete every stored snippet for the host
    DeleteAll,
    /// Hand a stored snippet to the runner
    Run(commands::run::RunArgs),
    /// List a template catalog
    Templates(commands::templates::TemplatesArgs),
}

async fn run(cli: Cli, config: PlaygroundConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = commands::open_engine(config)?;

    match cli.command {
        Commands::Import(args) => commands::import::execute(args, &mut engine).await,
        Commands::Save(args) => commands::snippet::execute_save(args, &mut engine).await,
        Commands::List => commands::snippet::execute_list(&mut engine).await,
        Commands::Show(args) => commands::snippet::execute_show(args, &engine),
        Commands::Export(args) => commands::snippet::execute_export(args, &engine),
        Commands::Duplicate(args) => commands::import::execute_duplicate(args, &mut engine).await,
        Commands::Delete(args) => commands::snippet::execute_delete(args, &mut engine).await,
        Commands::DeleteAll => commands::snippet::execute_delete_all(&mut engine).await,
        Commands::Run(args) => commands::run::execute(args, &mut engine).await,
        Commands::Templates(args) => commands::templates::execute(args, &mut engine).await,
    }
}

fn load_config(cli: &Cli) -> Result<PlaygroundConfig, Box<dyn std::error::Error>> {
    let mut config = PlaygroundConfig::load()?;
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(db) = &cli.db {
        config.database_path = db.clone();
    }
    Ok(config)
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| {
        logging_facility::init(config.log_profile);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(run(cli, config))
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
