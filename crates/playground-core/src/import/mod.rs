//! Import pipeline stages that need no I/O
//!
//! Classification and normalization. Source resolution lives in the engine
//! crate because it talks to the network.

pub mod classify;
pub mod normalize;

pub use classify::{classify, Classifier, ImportKind, LengthHeuristicClassifier};
pub use normalize::{fill_defaults, normalize, ImportedSnippet};
