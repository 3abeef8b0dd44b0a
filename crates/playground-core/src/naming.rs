//! Name collision resolution
//!
//! Deterministic renaming for imported and duplicated snippets. The result
//! depends only on the candidate, the optional suffix, and the names already
//! stored, so no global counter is needed.

use crate::model::DEFAULT_NAME;

/// Separator between the name and each disambiguating segment
const SEGMENT_SEPARATOR: &str = " - ";

/// Whether any stored name equals `name` once both are trimmed
pub fn name_exists<'a, I>(existing: I, name: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let name = name.trim();
    existing.into_iter().any(|item| item.trim() == name)
}

/// Parse the trailing numeric token of a name
///
/// Accepts `(<digits>)` or bare trailing digits. Returns `None` when the name
/// has no numeric tail.
pub fn numeric_tail(name: &str) -> Option<u64> {
    let trimmed = name.trim();
    let body = trimmed.strip_suffix(')').unwrap_or(trimmed);
    let digits_start = body
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;

    body[digits_start..].parse().ok()
}

/// Generate a collision-free name
///
/// The candidate is the trimmed `name`, or `New Snippet` when blank. Every
/// stored name that starts with the candidate is inspected for a numeric
/// tail; when at least one carries a tail the counter is the largest tail
/// plus one, otherwise no counter is appended. The result is
/// `<candidate>[ - <suffix>][ - <counter>]`.
///
/// # Example
///
/// ```
/// use playground_core::naming::generate_name;
///
/// let existing = ["Foo", "Foo (1)"];
/// assert_eq!(generate_name(existing, "Foo", None), "Foo - 2");
/// assert_eq!(generate_name(["Widget"], "Widget", Some("copy")), "Widget - copy");
/// ```
pub fn generate_name<'a, I>(existing: I, name: &str, suffix: Option<&str>) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let trimmed = name.trim();
    let candidate = if trimmed.is_empty() {
        DEFAULT_NAME
    } else {
        trimmed
    };

    let counter = existing
        .into_iter()
        .map(str::trim)
        .filter(|item| item.starts_with(candidate))
        .filter_map(numeric_tail)
        .max()
        .map(|max| max.saturating_add(1))
        .unwrap_or(0);

    let mut generated = candidate.to_string();
    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        generated.push_str(SEGMENT_SEPARATOR);
        generated.push_str(suffix);
    }
    if counter > 0 {
        generated.push_str(SEGMENT_SEPARATOR);
        generated.push_str(&counter.to_string());
    }

    tracing::debug!(candidate, generated = %generated, "generated snippet name");
    generated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_tail_forms() {
        assert_eq!(numeric_tail("Foo (1)"), Some(1));
        assert_eq!(numeric_tail("Foo - 12"), Some(12));
        assert_eq!(numeric_tail("Foo (7)  "), Some(7));
        assert_eq!(numeric_tail("Foo"), None);
        assert_eq!(numeric_tail("Foo ()"), None);
        assert_eq!(numeric_tail("Foo - copy"), None);
    }

    #[test]
    fn test_counter_follows_max_tail() {
        let existing = ["Foo", "Foo (1)"];
        assert_eq!(generate_name(existing, "Foo", None), "Foo - 2");

        let existing = ["Foo", "Foo - 3", "Foo (1)"];
        assert_eq!(generate_name(existing, "Foo", None), "Foo - 4");
    }

    #[test]
    fn test_no_tail_means_no_counter() {
        assert_eq!(generate_name(["Widget"], "Widget", Some("copy")), "Widget - copy");
        assert_eq!(generate_name(["Widget"], "Widget", None), "Widget");
    }

    #[test]
    fn test_suffix_and_counter_combine() {
        let existing = ["Chart", "Chart (2)"];
        assert_eq!(
            generate_name(existing, "Chart", Some("copy")),
            "Chart - copy - 3"
        );
    }

    #[test]
    fn test_unrelated_names_are_ignored() {
        let existing = ["Bar (9)", "Foo"];
        assert_eq!(generate_name(existing, "Foo", None), "Foo");
    }

    #[test]
    fn test_blank_name_uses_default() {
        let existing = ["New Snippet", "New Snippet (4)"];
        assert_eq!(generate_name(existing, "   ", None), "New Snippet - 5");
    }

    #[test]
    fn test_candidate_is_trimmed() {
        assert_eq!(generate_name(["Foo (1)"], "  Foo  ", None), "Foo - 2");
    }

    #[test]
    fn test_name_exists_compares_trimmed() {
        assert!(name_exists([" Foo "], "Foo"));
        assert!(name_exists(["Foo"], "Foo  "));
        assert!(!name_exists(["Foo (1)"], "Foo"));
    }
}
