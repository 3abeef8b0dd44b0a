//! Import source classification
//!
//! Maps a raw input string to the source kind that knows how to resolve it.
//! The length checks are a compatibility heuristic and sit behind the
//! `Classifier` trait so a structural scheme can replace them.

use std::fmt;

use crate::identity::ID_LEN;

/// Prefix of a public gist page URL
pub const GIST_URL_PREFIX: &str = "https://gist.github.com";

/// Input that requests the stock sample for the current host
pub const DEFAULT_SENTINEL: &str = "default";

/// Length of a bare gist hash
pub const GIST_HASH_LEN: usize = 32;

/// Where an import input comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// Stock sample for the host
    Default,
    /// Key of a snippet already in the local store
    Identifier,
    /// Gist URL or bare gist hash
    Gist,
    /// Arbitrary HTTP(S) document
    Url,
    /// The input itself is serialized snippet content
    Inline,
}

impl ImportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::Default => "default",
            ImportKind::Identifier => "identifier",
            ImportKind::Gist => "gist",
            ImportKind::Url => "url",
            ImportKind::Inline => "inline",
        }
    }

    /// Whether an import of this kind is treated as foreign content
    ///
    /// Only an existing local entity is owned and directly editable.
    pub fn is_readonly(&self) -> bool {
        !matches!(self, ImportKind::Identifier)
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy for deciding the source kind of an import input
pub trait Classifier {
    /// Classify an input; `None` input means there is nothing to import
    fn classify(&self, input: Option<&str>) -> Option<ImportKind>;
}

/// Prefix and length based classifier
///
/// Rules, first match wins: gist URL, any `http` URL, the `default`
/// sentinel, 25 characters (identifier), 32 characters (gist hash),
/// otherwise inline content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthHeuristicClassifier;

impl Classifier for LengthHeuristicClassifier {
    fn classify(&self, input: Option<&str>) -> Option<ImportKind> {
        let input = input?;

        let kind = if input.starts_with(GIST_URL_PREFIX) {
            ImportKind::Gist
        } else if input.starts_with("http") {
            ImportKind::Url
        } else if input == DEFAULT_SENTINEL {
            ImportKind::Default
        } else {
            match input.chars().count() {
                ID_LEN => ImportKind::Identifier,
                GIST_HASH_LEN => ImportKind::Gist,
                _ => ImportKind::Inline,
            }
        };

        Some(kind)
    }
}

/// Classify with the default heuristic
pub fn classify(input: Option<&str>) -> Option<ImportKind> {
    LengthHeuristicClassifier.classify(input)
}
