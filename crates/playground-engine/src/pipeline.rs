//! Import pipeline
//!
//! classify -> resolve -> normalize. Resolution failures stop at this
//! boundary: they are logged and the import yields nothing.

use playground_core::errors::{ExError, Result};
use playground_core::import::{normalize, Classifier, ImportedSnippet};
use playground_core::{ContentStore, Snippet};
use tracing::{error, info, warn};

use crate::resolve::SourceResolver;

/// Classifier, resolver and host defaults for one engine
pub struct ImportPipeline {
    classifier: Box<dyn Classifier + Send + Sync>,
    resolver: SourceResolver,
    defaults: Snippet,
}

impl ImportPipeline {
    pub fn new(
        classifier: Box<dyn Classifier + Send + Sync>,
        resolver: SourceResolver,
        defaults: Snippet,
    ) -> Self {
        Self {
            classifier,
            resolver,
            defaults,
        }
    }

    /// Import and propagate resolution errors
    ///
    /// `Ok(None)` for an absent input or an identifier with no stored
    /// snippet.
    ///
    /// # Errors
    ///
    /// Returns `Fetch`, `Parse` or `Persistence` from the resolver or the
    /// name lookup.
    pub async fn try_import<S: ContentStore + ?Sized>(
        &self,
        input: Option<&str>,
        suffix: Option<&str>,
        store: &S,
    ) -> Result<Option<ImportedSnippet>> {
        let Some(kind) = self.classifier.classify(input) else {
            return Ok(None);
        };
        let input = input.unwrap_or_default();

        info!("Importing {} snippet", kind);

        let Some(raw) = self.resolver.resolve(kind, input, store).await? else {
            return Ok(None);
        };

        let names = store.names()?;
        Ok(Some(normalize(
            raw,
            kind,
            self.defaults.clone(),
            names.iter().map(String::as_str),
            suffix,
        )))
    }

    /// Import, logging and swallowing any failure
    pub async fn import<S: ContentStore + ?Sized>(
        &self,
        input: Option<&str>,
        suffix: Option<&str>,
        store: &S,
    ) -> Option<ImportedSnippet> {
        match self.try_import(input, suffix, store).await {
            Ok(imported) => imported,
            Err(err) => {
                let ex_err = ExError::from(err);
                if ex_err.kind().is_resolution_failure() {
                    warn!(err.code = ex_err.code(), error = %ex_err, "import resolution failed");
                } else {
                    error!(err.code = ex_err.code(), error = %ex_err, "import failed");
                }
                None
            }
        }
    }
}
