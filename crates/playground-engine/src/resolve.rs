//! Per-source resolution strategies
//!
//! Each import kind has one strategy that produces a raw, possibly partial
//! payload. `Ok(None)` means "no result"; errors are left for the pipeline
//! boundary to log and swallow. Only the default sample has a fallback.

use std::collections::BTreeMap;
use std::sync::Arc;

use playground_core::codec;
use playground_core::errors::{PlaygroundError, Result};
use playground_core::import::ImportKind;
use playground_core::model::snippet::{
    DEFAULT_SCRIPT_LANGUAGE, DEFAULT_STYLE_LANGUAGE, DEFAULT_TEMPLATE_LANGUAGE,
};
use playground_core::{CodeBlock, ContentStore, RawSnippet, Snippet};
use tracing::{debug, warn};

use crate::config::PlaygroundConfig;
use crate::fetch::{get, Fetcher, ResponseType};
use crate::gist::{GistFile, GistService};

const LEGACY_LIBRARIES: &str = "libraries.txt";
const LEGACY_SCRIPT: &str = "app.ts";
const LEGACY_TEMPLATE: &str = "index.html";
const LEGACY_STYLE: &str = "style.css";

/// Resolves classified import inputs into raw payloads
pub struct SourceResolver {
    fetcher: Arc<dyn Fetcher>,
    gists: Arc<dyn GistService>,
    default_sample_url: String,
    defaults: Snippet,
}

impl SourceResolver {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        gists: Arc<dyn GistService>,
        config: &PlaygroundConfig,
    ) -> Self {
        Self {
            fetcher,
            gists,
            default_sample_url: config.default_sample_url(),
            defaults: Snippet::defaults(&config.host),
        }
    }

    /// Run the strategy for `kind`
    ///
    /// # Errors
    ///
    /// Returns `Fetch` or `Parse` when a strategy without a fallback fails,
    /// and `Persistence` if the store lookup fails.
    pub async fn resolve<S: ContentStore + ?Sized>(
        &self,
        kind: ImportKind,
        input: &str,
        store: &S,
    ) -> Result<Option<RawSnippet>> {
        match kind {
            ImportKind::Default => Ok(Some(self.resolve_default().await)),
            ImportKind::Identifier => resolve_identifier(store, input),
            ImportKind::Gist => self.resolve_gist(input).await,
            ImportKind::Url => self.resolve_url(input).await,
            ImportKind::Inline => codec::parse_raw(input),
        }
    }

    /// Stock sample for the host, or the built-in defaults on any failure
    pub async fn resolve_default(&self) -> RawSnippet {
        match self.fetch_default_sample().await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                warn!(
                    url = %self.default_sample_url,
                    "default sample is empty, using built-in defaults"
                );
                RawSnippet::from(self.defaults.clone())
            }
            Err(err) => {
                warn!(
                    url = %self.default_sample_url,
                    error = %err,
                    "default sample unavailable, using built-in defaults"
                );
                RawSnippet::from(self.defaults.clone())
            }
        }
    }

    async fn fetch_default_sample(&self) -> Result<Option<RawSnippet>> {
        let body: String = get(
            self.fetcher.as_ref(),
            &self.default_sample_url,
            ResponseType::Text,
        )
        .await?;
        codec::parse_raw(&body)
    }

    /// Gist by URL or bare hash
    ///
    /// A `*.yml`/`*.yaml` file is parsed as-is, and an empty one yields
    /// nothing. Otherwise the snippet is rebuilt from the legacy file layout.
    ///
    /// # Errors
    ///
    /// Returns `Fetch` if the gist cannot be retrieved, `Parse` if its
    /// content is malformed.
    pub async fn resolve_gist(&self, input: &str) -> Result<Option<RawSnippet>> {
        let hash = gist_hash(input);
        let gist = self.gists.gist(hash).await?;

        match find_yaml_file(&gist.files) {
            Some((name, file)) => {
                debug!(gist = hash, file = %name, "gist carries a snippet document");
                codec::parse_raw(&file.content)
            }
            None => {
                debug!(gist = hash, "upgrading legacy gist");
                upgrade_legacy(&gist.files, hash).map(Some)
            }
        }
    }

    /// Arbitrary YAML document over HTTP; an empty body yields nothing
    ///
    /// # Errors
    ///
    /// Returns `Fetch` or `Parse`; there is no fallback.
    pub async fn resolve_url(&self, url: &str) -> Result<Option<RawSnippet>> {
        let body: String = get(self.fetcher.as_ref(), url, ResponseType::Text).await?;
        codec::parse_raw(&body)
    }
}

/// Existing snippet from the local store
///
/// # Errors
///
/// Returns `Persistence` if the store lookup fails.
pub fn resolve_identifier<S: ContentStore + ?Sized>(
    store: &S,
    id: &str,
) -> Result<Option<RawSnippet>> {
    Ok(store.get(id)?.map(RawSnippet::from))
}

/// Strip a gist page URL down to the gist hash
///
/// `https://gist.github.com/<user>/<hash>/` becomes `<hash>`; a bare hash is
/// returned unchanged.
pub fn gist_hash(input: &str) -> &str {
    let trimmed = input.trim().trim_end_matches('/');
    match trimmed.strip_prefix("https://gist.github.com/") {
        Some(rest) => rest.split_once('/').map(|(_, hash)| hash).unwrap_or(rest),
        None => trimmed,
    }
}

fn find_yaml_file(files: &BTreeMap<String, GistFile>) -> Option<(&String, &GistFile)> {
    files.iter().find(|(name, _)| {
        let name = name.to_ascii_lowercase();
        name.ends_with(".yaml") || name.ends_with(".yml")
    })
}

/// Rewrite legacy library lines
///
/// Lines starting with `//` become `https://`, then lines starting with `#`
/// (old comments) become `//`.
pub fn rewrite_library_refs(libraries: &str) -> String {
    libraries
        .split('\n')
        .map(|line| {
            if let Some(rest) = line.strip_prefix("//") {
                format!("https://{rest}")
            } else if let Some(rest) = line.strip_prefix('#') {
                format!("//{rest}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild a snippet from the pre-YAML gist layout
///
/// Provenance fields are cleared and `gist` is set to the resolved hash.
///
/// # Errors
///
/// Returns `Parse` if the first `*.json` file is not valid JSON.
pub fn upgrade_legacy(files: &BTreeMap<String, GistFile>, hash: &str) -> Result<RawSnippet> {
    let mut script = CodeBlock::empty(DEFAULT_SCRIPT_LANGUAGE);
    let mut style = CodeBlock::empty(DEFAULT_STYLE_LANGUAGE);
    let mut template = CodeBlock::empty(DEFAULT_TEMPLATE_LANGUAGE);
    let mut libraries = String::new();

    for (name, file) in files {
        match name.as_str() {
            LEGACY_LIBRARIES => libraries = rewrite_library_refs(&file.content),
            LEGACY_SCRIPT => script.content = file.content.clone(),
            LEGACY_TEMPLATE => template.content = file.content.clone(),
            LEGACY_STYLE => style.content = file.content.clone(),
            _ => {}
        }
    }

    let name = match files.iter().find(|(name, _)| name.ends_with(".json")) {
        Some((file_name, file)) => {
            let manifest: serde_json::Value =
                serde_json::from_str(&file.content).map_err(|e| PlaygroundError::Parse {
                    reason: format!("{file_name}: {e}"),
                })?;
            manifest
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        }
        None => None,
    };

    Ok(RawSnippet {
        name,
        description: Some(String::new()),
        author: Some(String::new()),
        source: Some(String::new()),
        gist: Some(hash.to_string()),
        script: Some(script.into()),
        style: Some(style.into()),
        template: Some(template.into()),
        libraries: Some(libraries),
        ..RawSnippet::default()
    })
}
