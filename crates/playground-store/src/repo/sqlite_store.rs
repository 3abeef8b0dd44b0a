//! SQLite content store
//!
//! One table holds every host's snippets; each `SqliteStore` is scoped to a
//! single namespace (`"<host> Snippets"`). Bodies are stored as JSON.

use std::path::Path;

use playground_core::errors::{PlaygroundError, Result as CoreResult};
use playground_core::{ContentStore, Snippet};
use rusqlite::{Connection, OptionalExtension};

use crate::db;
use crate::errors::{Result, StoreError};
use crate::migrations::apply_migrations;

/// Host-scoped snippet store backed by SQLite
pub struct SqliteStore {
    conn: Connection,
    namespace: String,
}

impl SqliteStore {
    /// Open (or create) a database file and scope it to `host`
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the file cannot be opened or migrated.
    pub fn open<P: AsRef<Path>>(path: P, host: &str) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn, host)
    }

    /// In-memory database scoped to `host`
    ///
    /// # Errors
    ///
    /// Returns a persistence error if migrations fail.
    pub fn open_in_memory(host: &str) -> Result<Self> {
        Self::from_connection(db::open_in_memory()?, host)
    }

    /// Wrap an existing connection, applying pending migrations
    ///
    /// # Errors
    ///
    /// Returns a persistence error if migrations fail.
    pub fn from_connection(mut conn: Connection, host: &str) -> Result<Self> {
        apply_migrations(&mut conn)?;
        let namespace = Self::namespace_for(host);
        tracing::debug!(namespace = %namespace, "opened snippet store");
        Ok(Self { conn, namespace })
    }

    /// Storage namespace used for a host
    pub fn namespace_for(host: &str) -> String {
        format!("{} Snippets", host)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of snippets in this namespace
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the query fails.
    pub fn count(&self) -> CoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM snippets WHERE namespace = ?1",
                [&self.namespace],
                |row| row.get(0),
            )
            .map_err(StoreError::sqlite("store_count"))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn encode(snippet: &Snippet) -> CoreResult<String> {
        serde_json::to_string(snippet).map_err(|source| {
            StoreError::Encode {
                snippet_id: snippet.id.clone(),
                source,
            }
            .into()
        })
    }

    fn decode(id: &str, body: &str) -> CoreResult<Snippet> {
        serde_json::from_str(body).map_err(|source| {
            StoreError::CorruptBody {
                snippet_id: id.to_string(),
                source,
            }
            .into()
        })
    }
}

impl ContentStore for SqliteStore {
    fn get(&self, id: &str) -> CoreResult<Option<Snippet>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snippets WHERE namespace = ?1 AND id = ?2",
                rusqlite::params![self.namespace, id],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::sqlite("store_get"))?;

        body.map(|body| Self::decode(id, &body)).transpose()
    }

    fn contains(&self, id: &str) -> CoreResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM snippets WHERE namespace = ?1 AND id = ?2",
                rusqlite::params![self.namespace, id],
                |_| Ok(()),
            )
            .optional()
            .map_err(StoreError::sqlite("store_contains"))?;
        Ok(found.is_some())
    }

    fn add(&mut self, id: &str, snippet: Snippet) -> CoreResult<()> {
        if self.contains(id)? {
            return Err(PlaygroundError::AlreadyExists {
                snippet_id: id.to_string(),
            });
        }

        let body = Self::encode(&snippet)?;
        let now = chrono::Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO snippets (namespace, id, name, body, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                rusqlite::params![self.namespace, id, snippet.name, body, now],
            )
            .map_err(StoreError::sqlite("store_add"))?;

        tracing::debug!(snippet_id = id, namespace = %self.namespace, "added snippet row");
        Ok(())
    }

    fn insert(&mut self, id: &str, snippet: Snippet) -> CoreResult<()> {
        let body = Self::encode(&snippet)?;
        let now = chrono::Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO snippets (namespace, id, name, body, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 ON CONFLICT(namespace, id) DO UPDATE SET
                    name = excluded.name,
                    body = excluded.body,
                    updated_at = excluded.updated_at",
                rusqlite::params![self.namespace, id, snippet.name, body, now],
            )
            .map_err(StoreError::sqlite("store_insert"))?;

        tracing::debug!(snippet_id = id, namespace = %self.namespace, "upserted snippet row");
        Ok(())
    }

    fn remove(&mut self, id: &str) -> CoreResult<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM snippets WHERE namespace = ?1 AND id = ?2",
                rusqlite::params![self.namespace, id],
            )
            .map_err(StoreError::sqlite("store_remove"))?;
        Ok(removed > 0)
    }

    fn clear(&mut self) -> CoreResult<()> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM snippets WHERE namespace = ?1",
                [&self.namespace],
            )
            .map_err(StoreError::sqlite("store_clear"))?;
        tracing::debug!(namespace = %self.namespace, removed, "cleared snippet rows");
        Ok(())
    }

    fn values(&self) -> CoreResult<Vec<Snippet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM snippets WHERE namespace = ?1 ORDER BY id")
            .map_err(StoreError::sqlite("store_values"))?;
        let rows = stmt
            .query_map([&self.namespace], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(StoreError::sqlite("store_values"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::sqlite("store_values"))?;

        rows.iter()
            .map(|(id, body)| Self::decode(id, body))
            .collect()
    }

    fn names(&self) -> CoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM snippets WHERE namespace = ?1 ORDER BY id")
            .map_err(StoreError::sqlite("store_names"))?;
        let names = stmt
            .query_map([&self.namespace], |row| row.get(0))
            .map_err(StoreError::sqlite("store_names"))?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(StoreError::sqlite("store_names"))?;
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, name: &str) -> Snippet {
        Snippet {
            id: id.to_string(),
            name: name.to_string(),
            ..Snippet::defaults("EXCEL")
        }
    }

    #[test]
    fn test_namespace_for_host() {
        assert_eq!(SqliteStore::namespace_for("EXCEL"), "EXCEL Snippets");
    }

    #[test]
    fn test_add_get_round_trip() {
        let mut store = SqliteStore::open_in_memory("EXCEL").unwrap();
        let entry = snippet("c1", "Chart");

        store.add("c1", entry.clone()).unwrap();

        assert_eq!(store.get("c1").unwrap(), Some(entry));
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_add_existing_key_fails() {
        let mut store = SqliteStore::open_in_memory("EXCEL").unwrap();
        store.add("c1", snippet("c1", "Chart")).unwrap();

        let err = store.add("c1", snippet("c1", "Other")).unwrap_err();
        assert!(matches!(err, PlaygroundError::AlreadyExists { .. }));
    }

    #[test]
    fn test_insert_upserts() {
        let mut store = SqliteStore::open_in_memory("EXCEL").unwrap();
        store.insert("c1", snippet("c1", "First")).unwrap();
        store.insert("c1", snippet("c1", "Second")).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.names().unwrap(), vec!["Second"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = SqliteStore::open_in_memory("EXCEL").unwrap();
        store.insert("a", snippet("a", "One")).unwrap();
        store.insert("b", snippet("b", "Two")).unwrap();

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        store.clear().unwrap();
        assert!(store.values().unwrap().is_empty());
    }
}
