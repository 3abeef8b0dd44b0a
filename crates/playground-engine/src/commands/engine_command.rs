//! Snippet engine: applies commands and returns notifications
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every command:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use std::sync::Arc;
use std::time::{Duration, Instant};

use playground_core::errors::{ExError, PlaygroundError, Result};
use playground_core::import::{ImportedSnippet, LengthHeuristicClassifier};
use playground_core::ops::snippet_ops;
use playground_core::{log_op_end, log_op_error, log_op_start};
use playground_core::{ContentStore, Notification, SaveOutcome, Snippet, SnippetCommand};
use playground_core_types::{RequestContext, TraceId};
use reqwest::Client;
use tracing::info;

use crate::config::PlaygroundConfig;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::gist::{GistService, GitHubGistService};
use crate::pipeline::ImportPipeline;
use crate::resolve::SourceResolver;
use crate::run::{FormPostDispatcher, RunDispatch, RunPayload};
use crate::templates;

/// External capabilities the engine talks to
pub struct Capabilities {
    pub fetcher: Arc<dyn Fetcher>,
    pub gists: Arc<dyn GistService>,
    pub dispatcher: Arc<dyn RunDispatch>,
}

impl Capabilities {
    /// HTTP-backed capabilities built from configuration
    ///
    /// # Errors
    ///
    /// Returns `Internal` if an HTTP client cannot be built.
    pub fn http(config: &PlaygroundConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        let dispatch_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlaygroundError::Internal {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new(timeout)?),
            gists: Arc::new(GitHubGistService::new(
                config.gist_api_root.clone(),
                config.github_token.clone(),
                timeout,
            )?),
            dispatcher: Arc::new(FormPostDispatcher::new(dispatch_client)),
        })
    }
}

/// Owns the content store and the capabilities for one host
pub struct SnippetEngine<S: ContentStore> {
    store: S,
    config: PlaygroundConfig,
    fetcher: Arc<dyn Fetcher>,
    dispatcher: Arc<dyn RunDispatch>,
    pipeline: ImportPipeline,
    // one per engine; groups every command of a session
    trace_id: TraceId,
}

impl<S: ContentStore> SnippetEngine<S> {
    pub fn new(store: S, config: PlaygroundConfig, capabilities: Capabilities) -> Self {
        let resolver = SourceResolver::new(
            Arc::clone(&capabilities.fetcher),
            capabilities.gists,
            &config,
        );
        let pipeline = ImportPipeline::new(
            Box::new(LengthHeuristicClassifier),
            resolver,
            Snippet::defaults(&config.host),
        );

        Self {
            store,
            config,
            fetcher: capabilities.fetcher,
            dispatcher: capabilities.dispatcher,
            pipeline,
            trace_id: TraceId::new(),
        }
    }

    /// Engine with HTTP capabilities
    ///
    /// # Errors
    ///
    /// Returns `Internal` if an HTTP client cannot be built.
    pub fn from_config(store: S, config: PlaygroundConfig) -> Result<Self> {
        let capabilities = Capabilities::http(&config)?;
        Ok(Self::new(store, config, capabilities))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    /// Import without mutating the store; failures yield `None`
    pub async fn import(
        &self,
        input: Option<&str>,
        suffix: Option<&str>,
    ) -> Option<ImportedSnippet> {
        self.pipeline.import(input, suffix, &self.store).await
    }

    /// Apply one command
    ///
    /// Every `StoreUpdated` is followed by a `SnippetsLoaded` reload. An
    /// import that produces nothing returns no notifications.
    ///
    /// # Errors
    ///
    /// Returns the failing operation's error with the request id attached.
    /// Import resolution failures are not errors.
    pub async fn apply(
        &mut self,
        cmd: SnippetCommand,
    ) -> std::result::Result<Vec<Notification>, ExError> {
        let op = cmd.op_name();
        let ctx = RequestContext::new().with_trace_id(self.trace_id.clone());
        let request_id = ctx.request_id.as_str();
        let trace_id = self.trace_id.to_string();
        log_op_start!(op, request_id = request_id, trace_id = trace_id.as_str());
        let start = Instant::now();

        match self.apply_impl(cmd).await {
            Ok(notifications) => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request_id,
                    trace_id = trace_id.as_str(),
                    notification_count = notifications.len()
                );
                Ok(notifications)
            }
            Err(err) => {
                let ex_err = ExError::from(err).with_request_id(ctx.request_id.clone());
                log_op_error!(
                    op,
                    ex_err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request_id,
                    trace_id = trace_id.as_str()
                );
                Err(ex_err)
            }
        }
    }

    async fn apply_impl(&mut self, cmd: SnippetCommand) -> Result<Vec<Notification>> {
        match cmd {
            SnippetCommand::Import { input, suffix } => {
                let imported = self.import(input.as_deref(), suffix.as_deref()).await;
                Ok(imported
                    .map(|imported| vec![import_succeeded(imported)])
                    .unwrap_or_default())
            }

            SnippetCommand::Save { snippet } | SnippetCommand::Create { snippet } => {
                let snippet_id = snippet.id.clone();
                match snippet_ops::save_snippet(&mut self.store, snippet)? {
                    SaveOutcome::Created => info!(snippet_id = %snippet_id, "Creating new snippet"),
                    SaveOutcome::Updated => info!(snippet_id = %snippet_id, "Saving snippet"),
                }
                self.store_updated(Vec::new())
            }

            SnippetCommand::Duplicate { id } => {
                let copy = snippet_ops::duplicate_snippet(
                    &self.store,
                    &id,
                    Snippet::defaults(&self.config.host),
                )?;
                Ok(vec![import_succeeded(copy)])
            }

            SnippetCommand::Delete { id } => {
                snippet_ops::delete_snippet(&mut self.store, &id)?;
                self.store_updated(vec![Notification::OpenMenu])
            }

            SnippetCommand::DeleteAll => {
                snippet_ops::delete_all(&mut self.store)?;
                self.store_updated(Vec::new())
            }

            SnippetCommand::LoadSnippets => Ok(vec![self.snippets_loaded()?]),

            SnippetCommand::Run { snippet } => {
                let fields = RunPayload::new(&snippet, &self.config)?.form_fields()?;
                self.dispatcher
                    .dispatch(&fields, &self.config.runner_url)
                    .await?;
                Ok(vec![Notification::RunDispatched {
                    snippet_id: snippet.id,
                }])
            }

            SnippetCommand::LoadTemplates { source } => {
                let templates =
                    templates::load_templates(self.fetcher.as_ref(), &self.config, &source).await?;
                Ok(vec![Notification::TemplatesLoaded { templates }])
            }
        }
    }

    /// `StoreUpdated`, then any extra notifications, then the reload
    fn store_updated(&self, extra: Vec<Notification>) -> Result<Vec<Notification>> {
        let mut notifications = vec![Notification::StoreUpdated];
        notifications.extend(extra);
        notifications.push(self.snippets_loaded()?);
        Ok(notifications)
    }

    fn snippets_loaded(&self) -> Result<Notification> {
        Ok(Notification::SnippetsLoaded {
            snippets: snippet_ops::load_snippets(&self.store)?,
        })
    }
}

fn import_succeeded(imported: ImportedSnippet) -> Notification {
    Notification::ImportSucceeded {
        snippet: imported.snippet,
        readonly: imported.readonly,
    }
}
