use std::collections::BTreeMap;

use crate::errors::{PlaygroundError, Result};
use crate::model::Snippet;

/// Keyed, host-scoped snippet storage
///
/// The single shared mutable resource of the system. Only persistence
/// operations mutate it; resolvers and the naming engine only read.
/// Implementations return owned snippets so a backing database can
/// satisfy the same contract as the in-memory map.
pub trait ContentStore {
    /// Look up a snippet by key
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn get(&self, id: &str) -> Result<Option<Snippet>>;

    /// Whether a key is stored
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Insert a new entry
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the key is taken. Callers check first or
    /// use `insert`.
    fn add(&mut self, id: &str, snippet: Snippet) -> Result<()>;

    /// Insert or overwrite an entry
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn insert(&mut self, id: &str, snippet: Snippet) -> Result<()>;

    /// Remove an entry, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn remove(&mut self, id: &str) -> Result<bool>;

    /// Remove every entry in this store's scope
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn clear(&mut self) -> Result<()>;

    /// All stored snippets, ordered by key
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn values(&self) -> Result<Vec<Snippet>>;

    /// Names of all stored snippets
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backend fails.
    fn names(&self) -> Result<Vec<String>> {
        Ok(self.values()?.into_iter().map(|s| s.name).collect())
    }
}

/// In-memory content store
///
/// BTreeMap-backed so `values()` is deterministic. Not thread-safe; the
/// engine owns it and hands out references.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snippets: BTreeMap<String, Snippet>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<Snippet>> {
        Ok(self.snippets.get(id).cloned())
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.snippets.contains_key(id))
    }

    fn add(&mut self, id: &str, snippet: Snippet) -> Result<()> {
        if self.snippets.contains_key(id) {
            return Err(PlaygroundError::AlreadyExists {
                snippet_id: id.to_string(),
            });
        }
        self.snippets.insert(id.to_string(), snippet);
        Ok(())
    }

    fn insert(&mut self, id: &str, snippet: Snippet) -> Result<()> {
        self.snippets.insert(id.to_string(), snippet);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        Ok(self.snippets.remove(id).is_some())
    }

    fn clear(&mut self) -> Result<()> {
        self.snippets.clear();
        Ok(())
    }

    fn values(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.values().cloned().collect())
    }
}
