//! Normalization of resolved payloads
//!
//! Turns a partial `RawSnippet` into a complete, storage-ready `Snippet`:
//! defaults are filled per field, an id is assigned when missing, and
//! foreign imports get a collision-free name.

use crate::identity;
use crate::import::classify::ImportKind;
use crate::model::{CodeBlock, RawCodeBlock, RawSnippet, Snippet};
use crate::naming;

/// A normalized import ready to hand back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedSnippet {
    pub snippet: Snippet,
    /// True for every kind except a local identifier
    pub readonly: bool,
}

fn fill_block(raw: Option<RawCodeBlock>, default: CodeBlock) -> CodeBlock {
    match raw {
        None => default,
        Some(raw) => CodeBlock {
            content: raw.content.unwrap_or(default.content),
            language: raw.language.unwrap_or(default.language),
        },
    }
}

/// Complete a partial payload against defaults
///
/// Present raw fields win; absent ones inherit. A present code block that
/// omits its language inherits the slot's default language.
pub fn fill_defaults(raw: RawSnippet, defaults: Snippet) -> Snippet {
    Snippet {
        id: raw.id.unwrap_or(defaults.id),
        gist: raw.gist.unwrap_or(defaults.gist),
        source: raw.source.unwrap_or(defaults.source),
        author: raw.author.unwrap_or(defaults.author),
        name: raw.name.unwrap_or(defaults.name),
        description: raw.description.unwrap_or(defaults.description),
        script: fill_block(raw.script, defaults.script),
        style: fill_block(raw.style, defaults.style),
        template: fill_block(raw.template, defaults.template),
        libraries: raw.libraries.unwrap_or(defaults.libraries),
    }
}

/// Normalize a resolved payload
///
/// `existing_names` is the store's current name set, used only for readonly
/// kinds whose name already exists. `suffix` is passed through to the naming
/// engine.
pub fn normalize<'a, I>(
    raw: RawSnippet,
    kind: ImportKind,
    defaults: Snippet,
    existing_names: I,
    suffix: Option<&str>,
) -> ImportedSnippet
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let mut snippet = fill_defaults(raw, defaults);

    if snippet.id.is_empty() {
        snippet.id = identity::new_id();
    }

    let readonly = kind.is_readonly();
    let names = existing_names.into_iter();
    if readonly && naming::name_exists(names.clone(), &snippet.name) {
        snippet.name = naming::generate_name(names, &snippet.name, suffix);
    }

    tracing::debug!(
        snippet_id = %snippet.id,
        import_kind = %kind,
        readonly,
        "normalized snippet"
    );

    ImportedSnippet { snippet, readonly }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_NAMES: [&str; 0] = [];

    fn raw_named(name: &str) -> RawSnippet {
        RawSnippet {
            name: Some(name.to_string()),
            ..RawSnippet::default()
        }
    }

    #[test]
    fn test_fill_defaults_keeps_present_fields() {
        let raw = RawSnippet {
            name: Some("Mine".to_string()),
            style: Some(RawCodeBlock {
                content: Some("body {}".to_string()),
                language: None,
            }),
            ..RawSnippet::default()
        };

        let snippet = fill_defaults(raw, Snippet::defaults("EXCEL"));

        assert_eq!(snippet.name, "Mine");
        assert_eq!(snippet.source, "EXCEL");
        assert_eq!(snippet.style.content, "body {}");
        assert_eq!(snippet.style.language, "css");
        assert_eq!(snippet.script.language, "typescript");
    }

    #[test]
    fn test_present_empty_string_wins() {
        let raw = RawSnippet {
            source: Some(String::new()),
            ..RawSnippet::default()
        };
        let snippet = fill_defaults(raw, Snippet::defaults("WORD"));
        assert_eq!(snippet.source, "");
    }

    #[test]
    fn test_assigns_id_when_missing() {
        let imported = normalize(
            raw_named("Fresh"),
            ImportKind::Inline,
            Snippet::defaults("WEB"),
            NO_NAMES,
            None,
        );
        assert_eq!(imported.snippet.id.len(), crate::identity::ID_LEN);
        assert!(imported.readonly);
    }

    #[test]
    fn test_keeps_existing_id() {
        let raw = RawSnippet {
            id: Some("keep-me".to_string()),
            ..raw_named("Kept")
        };
        let imported = normalize(raw, ImportKind::Url, Snippet::defaults("WEB"), NO_NAMES, None);
        assert_eq!(imported.snippet.id, "keep-me");
    }

    #[test]
    fn test_readonly_collision_is_renamed() {
        let imported = normalize(
            raw_named("Foo"),
            ImportKind::Gist,
            Snippet::defaults("WEB"),
            ["Foo", "Foo (1)"],
            None,
        );
        assert_eq!(imported.snippet.name, "Foo - 2");
    }

    #[test]
    fn test_identifier_is_never_renamed() {
        let imported = normalize(
            raw_named("Foo"),
            ImportKind::Identifier,
            Snippet::defaults("WEB"),
            ["Foo", "Foo (1)"],
            None,
        );
        assert_eq!(imported.snippet.name, "Foo");
        assert!(!imported.readonly);
    }

    #[test]
    fn test_suffix_passes_through() {
        let imported = normalize(
            raw_named("Chart"),
            ImportKind::Default,
            Snippet::defaults("WEB"),
            ["Chart"],
            Some("batch"),
        );
        assert_eq!(imported.snippet.name, "Chart - batch");
    }

    #[test]
    fn test_no_collision_keeps_name() {
        let imported = normalize(
            raw_named("Unique"),
            ImportKind::Inline,
            Snippet::defaults("WEB"),
            ["Other"],
            Some("batch"),
        );
        assert_eq!(imported.snippet.name, "Unique");
    }
}
