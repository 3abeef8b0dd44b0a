//! Remote fetch capability
//!
//! Resolvers and the template loader only see the `Fetcher` trait. Failures
//! surface as errors, never as silent defaults; the callers decide where a
//! fallback applies.

use std::time::Duration;

use async_trait::async_trait;
use playground_core::errors::{PlaygroundError, Result};
use reqwest::Client;
use serde::de::{DeserializeOwned, IntoDeserializer};
use tracing::debug;

/// How a fetched body should be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Yaml,
    Text,
}

/// Transport that retrieves a document body as text
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body at `url`
    ///
    /// # Errors
    ///
    /// Returns `Fetch` for transport failures and non-success statuses.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Decode a body according to its response type
///
/// # Errors
///
/// Returns `Parse` if the body does not match the requested type.
pub fn decode<T: DeserializeOwned>(body: String, response_type: ResponseType) -> Result<T> {
    match response_type {
        ResponseType::Json => serde_json::from_str(&body).map_err(|e| PlaygroundError::Parse {
            reason: e.to_string(),
        }),
        ResponseType::Yaml => Ok(serde_yaml::from_str(&body)?),
        ResponseType::Text => {
            let deserializer: serde::de::value::StringDeserializer<serde::de::value::Error> =
                body.into_deserializer();
            T::deserialize(deserializer).map_err(|e| PlaygroundError::Parse {
                reason: e.to_string(),
            })
        }
    }
}

/// Fetch and decode in one step
///
/// # Errors
///
/// Returns `Fetch` or `Parse` from the respective stage.
pub async fn get<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    url: &str,
    response_type: ResponseType,
) -> Result<T> {
    let body = fetcher.fetch_text(url).await?;
    decode(body, response_type)
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("playground-engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlaygroundError::Internal {
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let fetch_error = |reason: String| PlaygroundError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("status {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(format!("read body failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::Template;

    #[test]
    fn test_decode_json_list() {
        let body = r#"[{"id": "a", "name": "Basic"}]"#.to_string();
        let templates: Vec<Template> = decode(body, ResponseType::Json).unwrap();
        assert_eq!(templates[0].name, "Basic");
    }

    #[test]
    fn test_decode_yaml_list() {
        let body = "- id: a\n  name: Basic\n".to_string();
        let templates: Vec<Template> = decode(body, ResponseType::Yaml).unwrap();
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn test_decode_text_passthrough() {
        let text: String = decode("name: raw".to_string(), ResponseType::Text).unwrap();
        assert_eq!(text, "name: raw");
    }

    #[test]
    fn test_decode_bad_json_is_parse_error() {
        let err = decode::<Vec<Template>>("{".to_string(), ResponseType::Json).unwrap_err();
        assert!(matches!(err, PlaygroundError::Parse { .. }));
    }
}
