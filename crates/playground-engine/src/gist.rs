//! Gist service capability
//!
//! A gist is a multi-file text snippet hosted by GitHub. Only the file
//! names and contents matter here.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use playground_core::errors::{PlaygroundError, Result};
use playground_core_types::Sensitive;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// One file inside a gist
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub content: String,
}

/// Gist file listing, keyed by file name
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Gist {
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

impl Gist {
    /// Build a gist from `(name, content)` pairs
    pub fn from_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            files: files
                .into_iter()
                .map(|(name, content)| {
                    (
                        name.into(),
                        GistFile {
                            content: content.into(),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Looks up a gist by hash
#[async_trait]
pub trait GistService: Send + Sync {
    /// # Errors
    ///
    /// Returns `Fetch` if the gist cannot be retrieved, `Parse` if the
    /// response is not a gist listing.
    async fn gist(&self, hash: &str) -> Result<Gist>;
}

/// GitHub REST API gist lookup
pub struct GitHubGistService {
    client: Client,
    api_root: String,
    token: Option<Sensitive<String>>,
}

impl GitHubGistService {
    /// # Errors
    ///
    /// Returns `Internal` if the HTTP client cannot be built.
    pub fn new(
        api_root: impl Into<String>,
        token: Option<Sensitive<String>>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("playground-engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlaygroundError::Internal {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_root: api_root.into().trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl GistService for GitHubGistService {
    async fn gist(&self, hash: &str) -> Result<Gist> {
        let url = format!("{}/gists/{}", self.api_root, hash);
        debug!("Fetching gist {}", hash);

        let fetch_error = |reason: String| PlaygroundError::Fetch {
            url: url.clone(),
            reason,
        };

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| fetch_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("read body failed: {e}")))?;

        serde_json::from_str(&body).map_err(|e| PlaygroundError::Parse {
            reason: format!("gist {hash}: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gist_listing_deserializes() {
        let json = r#"{
            "id": "abc",
            "files": {
                "snippet.yaml": {"filename": "snippet.yaml", "content": "name: Foo"},
                "README.md": {"filename": "README.md"}
            }
        }"#;

        let gist: Gist = serde_json::from_str(json).unwrap();
        assert_eq!(gist.files["snippet.yaml"].content, "name: Foo");
        assert_eq!(gist.files["README.md"].content, "");
    }

    #[test]
    fn test_from_files() {
        let gist = Gist::from_files([("app.ts", "run()"), ("style.css", "")]);
        assert_eq!(gist.files.len(), 2);
        assert_eq!(gist.files["app.ts"].content, "run()");
    }
}
