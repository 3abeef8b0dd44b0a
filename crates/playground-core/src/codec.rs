//! Snippet serialization format
//!
//! YAML is the canonical on-the-wire and export representation. Parsing
//! yields a `RawSnippet` so partial payloads survive until normalization.

use crate::errors::{PlaygroundError, Result};
use crate::model::{RawSnippet, Snippet};

/// Parse serialized content into a possibly-partial snippet
///
/// An empty document (blank, comment-only, `---` or a bare null) is
/// `Ok(None)`.
///
/// # Errors
///
/// Returns `Parse` if the text is not a YAML mapping of snippet fields.
pub fn parse_raw(text: &str) -> Result<Option<RawSnippet>> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    if value.is_null() {
        tracing::debug!("empty snippet payload");
        return Ok(None);
    }
    let raw: RawSnippet = serde_yaml::from_value(value)?;
    tracing::debug!(has_name = raw.name.is_some(), "parsed snippet payload");
    Ok(Some(raw))
}

/// Parse serialized content that must carry every snippet field
///
/// # Errors
///
/// Returns `Parse` if any field is missing or malformed.
pub fn parse_snippet(text: &str) -> Result<Snippet> {
    Ok(serde_yaml::from_str(text)?)
}

/// Serialize a snippet to YAML
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn to_yaml(snippet: &Snippet) -> Result<String> {
    serde_yaml::to_string(snippet).map_err(|e| PlaygroundError::Serialization {
        message: e.to_string(),
    })
}

/// Serialize a partial snippet to YAML, omitting absent fields
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn raw_to_yaml(raw: &RawSnippet) -> Result<String> {
    serde_yaml::to_string(raw).map_err(|e| PlaygroundError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CodeBlock;

    #[test]
    fn test_parse_partial_payload() {
        let raw = parse_raw("name: Chart sample\nscript:\n  content: console.log(1)\n")
            .unwrap()
            .unwrap();

        assert_eq!(raw.name.as_deref(), Some("Chart sample"));
        let script = raw.script.unwrap();
        assert_eq!(script.content.as_deref(), Some("console.log(1)"));
        assert!(script.language.is_none());
        assert!(raw.id.is_none());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let raw = parse_raw("name: ~\nauthor: someone\n").unwrap().unwrap();
        assert!(raw.name.is_none());
        assert_eq!(raw.author.as_deref(), Some("someone"));
    }

    #[test]
    fn test_plain_text_is_parse_error() {
        let err = parse_raw("just some words").unwrap_err();
        assert!(matches!(err, PlaygroundError::Parse { .. }));
    }

    #[test]
    fn test_empty_documents_are_absent() {
        for text in ["", "   \n", "---", "---\n", "# just a comment\n", "~", "null"] {
            assert!(parse_raw(text).unwrap().is_none(), "{text:?}");
        }
    }

    #[test]
    fn test_full_snippet_round_trip() {
        let snippet = Snippet {
            id: format!("c{}1", "0".repeat(23)),
            name: "Round trip".to_string(),
            script: CodeBlock {
                content: "let x = 1;\nlet y = 2;".to_string(),
                language: "typescript".to_string(),
            },
            libraries: "jquery\n@types/jquery".to_string(),
            ..Snippet::defaults("EXCEL")
        };

        let yaml = to_yaml(&snippet).unwrap();
        assert_eq!(parse_snippet(&yaml).unwrap(), snippet);
    }

    #[test]
    fn test_raw_to_yaml_omits_absent_fields() {
        let raw = RawSnippet {
            name: Some("Only name".to_string()),
            ..RawSnippet::default()
        };
        let yaml = raw_to_yaml(&raw).unwrap();
        assert_eq!(yaml.trim(), "name: Only name");
    }
}
