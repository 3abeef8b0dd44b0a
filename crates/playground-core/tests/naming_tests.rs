mod common;

use common::{names, new_store, store_snippet};
use playground_core::naming::generate_name;

fn generate(store: &playground_core::MemoryStore, name: &str, suffix: Option<&str>) -> String {
    let existing = names(store);
    generate_name(existing.iter().map(String::as_str), name, suffix)
}

#[test]
fn test_parenthesised_tail_increments() {
    let mut store = new_store();
    store_snippet(&mut store, "a", "Foo");
    store_snippet(&mut store, "b", "Foo (1)");

    assert_eq!(generate(&store, "Foo", None), "Foo - 2");
}

#[test]
fn test_generated_names_keep_climbing() {
    let mut store = new_store();
    store_snippet(&mut store, "a", "Foo");
    store_snippet(&mut store, "b", "Foo (1)");

    let second = generate(&store, "Foo", None);
    store_snippet(&mut store, "c", &second);

    assert_eq!(generate(&store, "Foo", None), "Foo - 3");
}

#[test]
fn test_copy_suffix_without_tails() {
    let mut store = new_store();
    store_snippet(&mut store, "a", "Widget");

    assert_eq!(generate(&store, "Widget", Some("copy")), "Widget - copy");
}

#[test]
fn test_empty_suffix_is_omitted() {
    let mut store = new_store();
    store_snippet(&mut store, "a", "Foo (3)");

    assert_eq!(generate(&store, "Foo", Some("")), "Foo - 4");
}

#[test]
fn test_empty_store_returns_candidate() {
    let store = new_store();
    assert_eq!(generate(&store, "  Fresh  ", None), "Fresh");
    assert_eq!(generate(&store, "", None), "New Snippet");
}

#[test]
fn test_prefix_match_only() {
    let mut store = new_store();
    store_snippet(&mut store, "a", "My Foo (5)");

    // "My Foo (5)" does not start with "Foo"
    assert_eq!(generate(&store, "Foo", None), "Foo");
}
