//! Run dispatcher
//!
//! Serializes a snippet plus its envelope and hands it to the external
//! runner. The hand-off is one-shot: the response is not consumed.

use async_trait::async_trait;
use playground_core::codec;
use playground_core::errors::{PlaygroundError, Result};
use playground_core::Snippet;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::PlaygroundConfig;

/// Name of the single form field carrying the JSON envelope
pub const DATA_FIELD: &str = "data";

/// Envelope the runner expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPayload {
    /// YAML serialization of the snippet
    pub snippet: String,
    pub return_url: String,
    pub refresh_url: String,
    // passed through to the refresh page
    pub id: String,
    pub host: String,
    pub platform: String,
}

impl RunPayload {
    /// Build the envelope for a normalized snippet
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the snippet cannot be encoded.
    pub fn new(snippet: &Snippet, config: &PlaygroundConfig) -> Result<Self> {
        Ok(Self {
            snippet: codec::to_yaml(snippet)?,
            return_url: config.return_url.clone(),
            refresh_url: config.refresh_url(),
            id: snippet.id.clone(),
            host: config.host.clone(),
            platform: config.platform.clone(),
        })
    }

    /// Form fields for the hand-off: one `data` field holding the JSON envelope
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the envelope cannot be encoded.
    pub fn form_fields(&self) -> Result<Vec<(String, String)>> {
        let data = serde_json::to_string(self).map_err(|e| PlaygroundError::Serialization {
            message: e.to_string(),
        })?;
        Ok(vec![(DATA_FIELD.to_string(), data)])
    }
}

/// Transport for the cross-origin hand-off
#[async_trait]
pub trait RunDispatch: Send + Sync {
    /// Submit the fields to `target`
    ///
    /// # Errors
    ///
    /// Returns `Dispatch` if the submission cannot be delivered.
    async fn dispatch(&self, fields: &[(String, String)], target: &str) -> Result<()>;
}

/// Posts the fields as `application/x-www-form-urlencoded`
pub struct FormPostDispatcher {
    client: Client,
}

impl FormPostDispatcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RunDispatch for FormPostDispatcher {
    async fn dispatch(&self, fields: &[(String, String)], target: &str) -> Result<()> {
        debug!("Posting run payload to {}", target);

        let response = self
            .client
            .post(target)
            .form(fields)
            .send()
            .await
            .map_err(|e| PlaygroundError::Dispatch {
                target: target.to_string(),
                reason: e.to_string(),
            })?;

        // fire-and-forget: the body belongs to the runner's page
        debug!(status = %response.status(), "runner accepted hand-off");
        Ok(())
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Self-submitting HTML page that posts the fields to `target`
///
/// Opening the page in a browser performs the same hidden-form hand-off an
/// editor surface would.
pub fn render_autosubmit_form(fields: &[(String, String)], target: &str) -> String {
    let inputs: String = fields
        .iter()
        .map(|(name, value)| {
            format!(
                "    <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                escape_html(name),
                escape_html(value)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<body onload=\"document.forms[0].submit()\">\n  \
         <form method=\"post\" action=\"{}\">\n{}  </form>\n</body>\n</html>\n",
        escape_html(target),
        inputs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlaygroundConfig {
        PlaygroundConfig {
            host: "EXCEL".to_string(),
            platform: "PC".to_string(),
            origin: "https://editor.example.com".to_string(),
            return_url: "https://editor.example.com/#/edit".to_string(),
            ..PlaygroundConfig::default()
        }
    }

    #[test]
    fn test_payload_envelope() {
        let snippet = Snippet {
            id: "c1".to_string(),
            ..Snippet::defaults("EXCEL")
        };

        let payload = RunPayload::new(&snippet, &config()).unwrap();

        assert_eq!(payload.refresh_url, "https://editor.example.com/refresh.html");
        assert_eq!(payload.id, "c1");
        assert_eq!(codec::parse_snippet(&payload.snippet).unwrap(), snippet);
    }

    #[test]
    fn test_form_fields_use_camel_case_json() {
        let snippet = Snippet {
            id: "c1".to_string(),
            ..Snippet::defaults("EXCEL")
        };
        let fields = RunPayload::new(&snippet, &config())
            .unwrap()
            .form_fields()
            .unwrap();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "data");
        let json: serde_json::Value = serde_json::from_str(&fields[0].1).unwrap();
        assert_eq!(json["returnUrl"], "https://editor.example.com/#/edit");
        assert_eq!(json["refreshUrl"], "https://editor.example.com/refresh.html");
        assert_eq!(json["host"], "EXCEL");
        assert_eq!(json["platform"], "PC");
    }

    #[test]
    fn test_autosubmit_form_escapes_values() {
        let fields = vec![("data".to_string(), r#"{"a":"<b>"}"#.to_string())];
        let html = render_autosubmit_form(&fields, "https://runner.example.com/");

        assert!(html.contains("action=\"https://runner.example.com/\""));
        assert!(html.contains("value=\"{&quot;a&quot;:&quot;&lt;b&gt;&quot;}\""));
        assert!(html.contains("document.forms[0].submit()"));
    }
}
