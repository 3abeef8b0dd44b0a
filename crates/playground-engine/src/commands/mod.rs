//! Command orchestration layer.
//!
//! Applies `SnippetCommand`s against the content store and the external
//! capabilities, returning notifications.

pub mod engine_command;

pub use engine_command::{Capabilities, SnippetEngine};
