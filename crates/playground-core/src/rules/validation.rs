use crate::errors::{PlaygroundError, Result};
use crate::model::Snippet;

/// Validate a snippet before it is written to the store
///
/// A persisted snippet must carry a non-empty name and id.
///
/// # Errors
/// * `EmptySnippet` - If every field is empty
/// * `EmptyName` - If the name is empty or whitespace-only
/// * `MissingId` - If the id is empty
pub fn validate_snippet(snippet: &Snippet) -> Result<()> {
    if snippet.is_empty() {
        return Err(PlaygroundError::EmptySnippet);
    }

    if snippet.name.trim().is_empty() {
        return Err(PlaygroundError::EmptyName {
            snippet_id: snippet.id.clone(),
        });
    }

    if snippet.id.is_empty() {
        return Err(PlaygroundError::MissingId {
            name: snippet.name.clone(),
        });
    }

    Ok(())
}
