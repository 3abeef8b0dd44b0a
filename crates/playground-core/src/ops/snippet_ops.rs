use super::store::ContentStore;
use crate::errors::{PlaygroundError, Result};
use crate::identity;
use crate::import::{fill_defaults, ImportedSnippet};
use crate::model::{RawSnippet, Snippet};
use crate::naming;
use crate::rules::validate_snippet;

/// Suffix marker appended to the name of a duplicated snippet
pub const COPY_SUFFIX: &str = "copy";

/// Whether a save created a new entry or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Validate then write a snippet
///
/// Overwrites when the key exists, inserts otherwise. The store is left
/// unchanged when validation fails.
///
/// # Errors
/// * `EmptySnippet` / `EmptyName` / `MissingId` - If validation fails
/// * `Persistence` - If the backend fails
pub fn save_snippet<S: ContentStore + ?Sized>(
    store: &mut S,
    snippet: Snippet,
) -> Result<SaveOutcome> {
    validate_snippet(&snippet)?;

    let id = snippet.id.clone();
    if store.contains(&id)? {
        tracing::debug!(snippet_id = %id, name = %snippet.name, "saving snippet");
        store.insert(&id, snippet)?;
        Ok(SaveOutcome::Updated)
    } else {
        tracing::debug!(snippet_id = %id, name = %snippet.name, "creating snippet");
        store.add(&id, snippet)?;
        Ok(SaveOutcome::Created)
    }
}

/// Clone a stored snippet under a fresh id and a derived name
///
/// The copy is returned as a readonly import and is not persisted; the
/// caller saves it.
///
/// # Errors
/// * `SnippetNotFound` - If no snippet is stored under `id`
/// * `Persistence` - If the backend fails
pub fn duplicate_snippet<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
    defaults: Snippet,
) -> Result<ImportedSnippet> {
    let original = store
        .get(id)?
        .ok_or_else(|| PlaygroundError::SnippetNotFound {
            snippet_id: id.to_string(),
        })?;

    let mut copy = fill_defaults(RawSnippet::from(original), defaults);
    copy.id = identity::new_id();

    let names = store.names()?;
    copy.name = naming::generate_name(
        names.iter().map(String::as_str),
        &copy.name,
        Some(COPY_SUFFIX),
    );

    tracing::debug!(source_id = id, snippet_id = %copy.id, name = %copy.name, "duplicated snippet");

    Ok(ImportedSnippet {
        snippet: copy,
        readonly: true,
    })
}

/// Remove a snippet by key
///
/// Removing an absent key is not an error; the return value reports
/// whether anything was removed.
///
/// # Errors
/// * `Persistence` - If the backend fails
pub fn delete_snippet<S: ContentStore + ?Sized>(store: &mut S, id: &str) -> Result<bool> {
    let removed = store.remove(id)?;
    tracing::debug!(snippet_id = id, removed, "deleted snippet");
    Ok(removed)
}

/// Clear the whole store
///
/// # Errors
/// * `Persistence` - If the backend fails
pub fn delete_all<S: ContentStore + ?Sized>(store: &mut S) -> Result<()> {
    store.clear()
}

/// Re-read every stored snippet
///
/// # Errors
/// * `Persistence` - If the backend fails
pub fn load_snippets<S: ContentStore + ?Sized>(store: &S) -> Result<Vec<Snippet>> {
    store.values()
}
