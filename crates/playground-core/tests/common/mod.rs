use playground_core::{ContentStore, MemoryStore, Snippet};

/// Host used by every test fixture
#[allow(dead_code)]
pub const HOST: &str = "EXCEL";

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Build a complete snippet with the given id and name
#[allow(dead_code)]
pub fn snippet(id: &str, name: &str) -> Snippet {
    Snippet {
        id: id.to_string(),
        name: name.to_string(),
        ..Snippet::defaults(HOST)
    }
}

/// Insert a snippet directly, bypassing validation, for test setup
#[allow(dead_code)]
pub fn store_snippet(store: &mut MemoryStore, id: &str, name: &str) {
    store.insert(id, snippet(id, name)).unwrap();
}

/// Names currently in the store, in key order
#[allow(dead_code)]
pub fn names(store: &MemoryStore) -> Vec<String> {
    store.names().unwrap()
}
