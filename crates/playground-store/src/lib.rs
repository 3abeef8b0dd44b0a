//! Playground Store - SQLite persistence for snippets
//!
//! Provides:
//! - SQLite schema with an embedded, checksummed migrations framework
//! - `SqliteStore`, a host-scoped `ContentStore` implementation

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::{Result, StoreError};
pub use repo::SqliteStore;
