//! Repository layer
//!
//! SQLite-backed implementation of the `ContentStore` capability

mod sqlite_store;

pub use sqlite_store::SqliteStore;
