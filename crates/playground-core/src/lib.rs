//! Playground Core - snippet model and the I/O-free half of the pipeline
//!
//! This crate provides:
//! - The `Snippet` and `Template` models with their YAML codec
//! - Identity generation and import classification
//! - Normalization and the name collision algorithm
//! - The `ContentStore` capability with an in-memory implementation
//! - Persistence operations (save, duplicate, delete, delete-all, reload)
//! - The error and logging facilities shared by every crate

pub mod codec;
pub mod commands;
pub mod errors;
pub mod identity;
pub mod import;
pub mod logging_facility;
pub mod model;
pub mod naming;
pub mod notifications;
pub mod ops;
pub mod rules;

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing as __tracing;
pub use playground_core_types;

// Re-export commonly used types
pub use commands::SnippetCommand;
pub use errors::{ExError, ExErrorKind, PlaygroundError, Result};
pub use import::{ImportKind, ImportedSnippet};
pub use model::{CodeBlock, RawCodeBlock, RawSnippet, Snippet, Template};
pub use notifications::Notification;
pub use ops::{ContentStore, MemoryStore, SaveOutcome};
