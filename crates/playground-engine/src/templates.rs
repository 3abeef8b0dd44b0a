//! Template catalog loader

use playground_core::commands::LOCAL_TEMPLATES;
use playground_core::errors::Result;
use playground_core::Template;
use tracing::warn;

use crate::config::PlaygroundConfig;
use crate::fetch::{get, Fetcher, ResponseType};

/// Load a template catalog
///
/// `LOCAL` reads the host playlist as YAML and degrades to an empty list
/// when it is unavailable. Any other source is a URL to a JSON list and has
/// no fallback.
///
/// # Errors
///
/// Returns `Fetch` or `Parse` for a non-`LOCAL` source that fails.
pub async fn load_templates(
    fetcher: &dyn Fetcher,
    config: &PlaygroundConfig,
    source: &str,
) -> Result<Vec<Template>> {
    if source == LOCAL_TEMPLATES {
        let url = config.playlist_url();
        match get::<Vec<Template>>(fetcher, &url, ResponseType::Yaml).await {
            Ok(templates) => Ok(templates),
            Err(err) => {
                warn!(url = %url, error = %err, "playlist unavailable, no templates loaded");
                Ok(Vec::new())
            }
        }
    } else {
        get(fetcher, source, ResponseType::Json).await
    }
}
