pub mod snippet_ops;
pub mod store;

pub use snippet_ops::{
    delete_all, delete_snippet, duplicate_snippet, load_snippets, save_snippet, SaveOutcome,
    COPY_SUFFIX,
};
pub use store::{ContentStore, MemoryStore};
