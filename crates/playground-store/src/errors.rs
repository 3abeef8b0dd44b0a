//! Error handling for playground-store
//!
//! Store-level plumbing (connections, migrations) reports `ExError`; the
//! `ContentStore` implementation reports the domain `PlaygroundError` so it
//! is interchangeable with the in-memory store.

use playground_core::errors::{ExError, ExErrorKind, PlaygroundError};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Failures inside the SQLite content store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("sqlite error during {op}: {source}")]
    Sqlite {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("stored body for {snippet_id} is unreadable: {source}")]
    CorruptBody {
        snippet_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode snippet {snippet_id}: {source}")]
    Encode {
        snippet_id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Wrap a rusqlite error with the store operation that raised it
    pub fn sqlite(op: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
        move |source| StoreError::Sqlite { op, source }
    }
}

impl From<StoreError> for PlaygroundError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Sqlite { op, .. } => PlaygroundError::Persistence {
                op: (*op).to_string(),
                message: err.to_string(),
            },
            StoreError::CorruptBody { .. } => PlaygroundError::Persistence {
                op: "store_read".to_string(),
                message: err.to_string(),
            },
            StoreError::Encode { .. } => PlaygroundError::Serialization {
                message: err.to_string(),
            },
        }
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
