//! Playground Engine - Orchestration layer
//!
//! Wires the I/O-free core to the outside world: remote fetches, gist
//! lookups, the run hand-off and the template catalog. `SnippetEngine`
//! applies commands and owns lifecycle logging.

pub mod commands;
pub mod config;
pub mod fetch;
pub mod gist;
pub mod pipeline;
pub mod resolve;
pub mod run;
pub mod templates;

pub use commands::{Capabilities, SnippetEngine};
pub use config::PlaygroundConfig;
pub use fetch::{Fetcher, HttpFetcher, ResponseType};
pub use gist::{Gist, GistFile, GistService, GitHubGistService};
pub use pipeline::ImportPipeline;
pub use resolve::SourceResolver;
pub use run::{render_autosubmit_form, FormPostDispatcher, RunDispatch, RunPayload};
