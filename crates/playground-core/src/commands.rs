//! Command inventory for the snippet pipeline
//!
//! Every user-facing operation enters the engine as one of these commands
//! and leaves as a list of notifications.

use crate::model::Snippet;

/// Source tag for the host's stock template catalog
pub const LOCAL_TEMPLATES: &str = "LOCAL";

/// Operations accepted by `SnippetEngine::apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetCommand {
    /// Classify, resolve and normalize an input string
    ///
    /// `None` input is a no-op. `suffix` disambiguates names when several
    /// imports happen in one batch.
    Import {
        input: Option<String>,
        suffix: Option<String>,
    },

    /// Validate and write a snippet (upsert)
    Save { snippet: Snippet },

    /// Same write path as `Save`, used for brand-new snippets
    Create { snippet: Snippet },

    /// Clone a stored snippet under a new id and a `copy` name
    Duplicate { id: String },

    /// Remove one snippet
    Delete { id: String },

    /// Remove every snippet for the host
    DeleteAll,

    /// Re-read the store
    LoadSnippets,

    /// Hand a snippet to the external runner
    Run { snippet: Snippet },

    /// Load a template catalog; `LOCAL` or a direct URL
    LoadTemplates { source: String },
}

impl SnippetCommand {
    /// Stable operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            SnippetCommand::Import { .. } => "snippet_import",
            SnippetCommand::Save { .. } => "snippet_save",
            SnippetCommand::Create { .. } => "snippet_create",
            SnippetCommand::Duplicate { .. } => "snippet_duplicate",
            SnippetCommand::Delete { .. } => "snippet_delete",
            SnippetCommand::DeleteAll => "snippet_delete_all",
            SnippetCommand::LoadSnippets => "snippet_load",
            SnippetCommand::Run { .. } => "snippet_run",
            SnippetCommand::LoadTemplates { .. } => "templates_load",
        }
    }
}
