//! Templates command
//!
//! Usage: playground templates [SOURCE]

use clap::Args;
use playground_core::commands::LOCAL_TEMPLATES;
use playground_core::{Notification, SnippetCommand};

use super::Engine;

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// `LOCAL` for the host playlist, or a URL to a JSON catalog
    #[arg(default_value = LOCAL_TEMPLATES)]
    pub source: String,
}

pub async fn execute(
    args: TemplatesArgs,
    engine: &mut Engine,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifications = engine
        .apply(SnippetCommand::LoadTemplates {
            source: args.source,
        })
        .await?;

    for notification in notifications {
        if let Notification::TemplatesLoaded { templates } = notification {
            for template in templates {
                println!(
                    "{}\t{}\t{}",
                    template.import_input(),
                    template.name,
                    template.description
                );
            }
        }
    }
    Ok(())
}
