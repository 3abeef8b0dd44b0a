use serde::{Deserialize, Serialize};

/// Default display name for a snippet without one
pub const DEFAULT_NAME: &str = "New Snippet";

pub const DEFAULT_SCRIPT_LANGUAGE: &str = "typescript";
pub const DEFAULT_STYLE_LANGUAGE: &str = "css";
pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "html";

/// One editable code pane (script, style or template)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pub content: String,
    pub language: String,
}

impl CodeBlock {
    /// Create an empty block in the given language
    pub fn empty(language: &str) -> Self {
        Self {
            content: String::new(),
            language: language.to_string(),
        }
    }
}

/// Snippet - the persisted unit of user content
///
/// `id` is empty only before the normalizer assigns one; after that it is
/// the store key and never changes. `name` is unique only by policy (see
/// `naming::generate_name`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub gist: String,
    pub source: String,
    pub author: String,
    pub name: String,
    pub description: String,
    pub script: CodeBlock,
    pub style: CodeBlock,
    pub template: CodeBlock,
    /// Newline-delimited library references
    pub libraries: String,
}

impl Snippet {
    /// Built-in defaults for the given host
    ///
    /// Every import is completed against these values.
    pub fn defaults(host: &str) -> Self {
        Self {
            id: String::new(),
            gist: String::new(),
            source: host.to_string(),
            author: String::new(),
            name: DEFAULT_NAME.to_string(),
            description: String::new(),
            script: CodeBlock::empty(DEFAULT_SCRIPT_LANGUAGE),
            style: CodeBlock::empty(DEFAULT_STYLE_LANGUAGE),
            template: CodeBlock::empty(DEFAULT_TEMPLATE_LANGUAGE),
            libraries: String::new(),
        }
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Library references, one per non-blank line
    pub fn library_refs(&self) -> impl Iterator<Item = &str> {
        self.libraries
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Partial code block as found in an imported payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawCodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<CodeBlock> for RawCodeBlock {
    fn from(block: CodeBlock) -> Self {
        Self {
            content: Some(block.content),
            language: Some(block.language),
        }
    }
}

/// Possibly-partial snippet produced by a source resolver
///
/// A `None` field means "absent" and inherits the default during
/// normalization. YAML `null` is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSnippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<RawCodeBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<RawCodeBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<RawCodeBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libraries: Option<String>,
}

impl From<Snippet> for RawSnippet {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: Some(snippet.id),
            gist: Some(snippet.gist),
            source: Some(snippet.source),
            author: Some(snippet.author),
            name: Some(snippet.name),
            description: Some(snippet.description),
            script: Some(snippet.script.into()),
            style: Some(snippet.style.into()),
            template: Some(snippet.template.into()),
            libraries: Some(snippet.libraries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_host_and_languages() {
        let snippet = Snippet::defaults("EXCEL");

        assert_eq!(snippet.source, "EXCEL");
        assert_eq!(snippet.name, DEFAULT_NAME);
        assert_eq!(snippet.script.language, "typescript");
        assert_eq!(snippet.style.language, "css");
        assert_eq!(snippet.template.language, "html");
        assert!(snippet.id.is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(Snippet::default().is_empty());
        assert!(!Snippet::defaults("WEB").is_empty());
    }

    #[test]
    fn test_library_refs_skip_blank_lines() {
        let snippet = Snippet {
            libraries: "office-ui-fabric-js\n\n  @types/office-js \n".to_string(),
            ..Snippet::default()
        };

        let refs: Vec<&str> = snippet.library_refs().collect();
        assert_eq!(refs, vec!["office-ui-fabric-js", "@types/office-js"]);
    }

    #[test]
    fn test_raw_from_snippet_keeps_every_field() {
        let snippet = Snippet::defaults("WORD");
        let raw = RawSnippet::from(snippet.clone());

        assert_eq!(raw.name.as_deref(), Some(DEFAULT_NAME));
        assert_eq!(
            raw.script.and_then(|s| s.language).as_deref(),
            Some("typescript")
        );
        assert_eq!(raw.source.as_deref(), Some("WORD"));
    }
}
