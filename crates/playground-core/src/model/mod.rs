pub mod snippet;
pub mod template;

pub use snippet::{CodeBlock, RawCodeBlock, RawSnippet, Snippet, DEFAULT_NAME};
pub use template::Template;
