use serde::{Deserialize, Serialize};

/// Catalog entry used to seed a new snippet
///
/// Read-only and never persisted locally. Catalog files in the wild carry
/// extra keys, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Template {
    /// Import input for this entry (gist hash, URL or `default`)
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gist: String,
}

impl Template {
    /// The string to hand to the import pipeline for this entry
    pub fn import_input(&self) -> &str {
        if self.gist.is_empty() {
            &self.id
        } else {
            &self.gist
        }
    }
}
