//! Notifications emitted after a command completes
//!
//! Callers (CLI, UI shell) react to these; the engine itself follows every
//! `StoreUpdated` with a `SnippetsLoaded` reload.

use crate::model::{Snippet, Template};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// An import or duplicate produced a normalized snippet
    ImportSucceeded { snippet: Snippet, readonly: bool },

    /// The store changed structurally
    StoreUpdated,

    /// The editing surface must leave the current snippet
    OpenMenu,

    /// Full store contents after a reload
    SnippetsLoaded { snippets: Vec<Snippet> },

    /// A template catalog was loaded
    TemplatesLoaded { templates: Vec<Template> },

    /// A snippet was handed to the runner
    RunDispatched { snippet_id: String },
}

impl Notification {
    pub fn is_store_updated(&self) -> bool {
        matches!(self, Notification::StoreUpdated)
    }
}
