//! Engine configuration
//!
//! Layered with the `config` crate: struct defaults, then an optional
//! `playground.toml`, then `PLAYGROUND_*` environment variables.

use std::path::{Path, PathBuf};

use playground_core::errors::{ExError, ExErrorKind};
use playground_core::logging_facility::Profile;
use playground_core_types::Sensitive;
use serde::Deserialize;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";

/// Environment variable prefix (`PLAYGROUND_HOST`, `PLAYGROUND_RUNNER_URL`, ...)
pub const ENV_PREFIX: &str = "PLAYGROUND";

pub const DEFAULT_SAMPLES_ROOT: &str =
    "https://raw.githubusercontent.com/WrathOfZombies/samples/deployment";
pub const DEFAULT_RUNNER_URL: &str = "https://addin-playground-runner.azurewebsites.net/";
pub const DEFAULT_GIST_API_ROOT: &str = "https://api.github.com";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Host application tag (`EXCEL`, `WORD`, `WEB`, ...)
    pub host: String,
    /// Platform tag forwarded to the runner
    pub platform: String,
    /// Origin of the editor surface; the refresh page lives under it
    pub origin: String,
    /// Page the runner sends the user back to
    pub return_url: String,
    /// Root of the stock samples and playlists
    pub samples_root: String,
    /// External execution endpoint
    pub runner_url: String,
    /// GitHub API root for gist lookups
    pub gist_api_root: String,
    /// Optional token for authenticated gist lookups
    pub github_token: Option<Sensitive<String>>,
    /// SQLite file backing the content store
    pub database_path: PathBuf,
    pub http_timeout_secs: u64,
    pub log_profile: Profile,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            host: "WEB".to_string(),
            platform: "PC".to_string(),
            origin: "https://localhost:3000".to_string(),
            return_url: "https://localhost:3000/".to_string(),
            samples_root: DEFAULT_SAMPLES_ROOT.to_string(),
            runner_url: DEFAULT_RUNNER_URL.to_string(),
            gist_api_root: DEFAULT_GIST_API_ROOT.to_string(),
            github_token: None,
            database_path: PathBuf::from("playground.db"),
            http_timeout_secs: 30,
            log_profile: Profile::Development,
        }
    }
}

impl PlaygroundConfig {
    /// Load from `playground.toml` (if present) and `PLAYGROUND_*` variables
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a source is malformed.
    pub fn load() -> Result<Self, ExError> {
        Self::load_with(Some(Path::new(DEFAULT_CONFIG_FILE)), ENV_PREFIX)
    }

    /// Load from an explicit file and environment prefix
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a source is malformed.
    pub fn load_with(file: Option<&Path>, env_prefix: &str) -> Result<Self, ExError> {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(false));
        }
        builder =
            builder.add_source(config::Environment::with_prefix(env_prefix).try_parsing(true));

        let settings = builder.build().map_err(config_error)?;
        let loaded: Self = settings.try_deserialize().map_err(config_error)?;

        tracing::debug!(
            host = %loaded.host,
            runner_url = %loaded.runner_url,
            database_path = %loaded.database_path.display(),
            "loaded configuration"
        );
        Ok(loaded)
    }

    /// URL of the refresh page the runner reloads after a run
    pub fn refresh_url(&self) -> String {
        format!("{}/refresh.html", self.origin.trim_end_matches('/'))
    }

    /// Host tag lower-cased, as used in sample paths
    pub fn host_key(&self) -> String {
        self.host.to_lowercase()
    }

    /// Stock sample document for the configured host
    pub fn default_sample_url(&self) -> String {
        format!(
            "{}/{}/default.yaml",
            self.samples_root.trim_end_matches('/'),
            self.host_key()
        )
    }

    /// Template playlist for the configured host
    pub fn playlist_url(&self) -> String {
        format!(
            "{}/playlists/{}.yaml",
            self.samples_root.trim_end_matches('/'),
            self.host_key()
        )
    }
}

fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("config_load")
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.runner_url, DEFAULT_RUNNER_URL);
        assert_eq!(config.http_timeout_secs, 30);
        assert!(config.github_token.is_none());
    }

    #[test]
    fn test_derived_urls() {
        let config = PlaygroundConfig {
            host: "EXCEL".to_string(),
            origin: "https://editor.example.com/".to_string(),
            samples_root: "https://samples.example.com/".to_string(),
            ..PlaygroundConfig::default()
        };

        assert_eq!(config.refresh_url(), "https://editor.example.com/refresh.html");
        assert_eq!(
            config.default_sample_url(),
            "https://samples.example.com/excel/default.yaml"
        );
        assert_eq!(
            config.playlist_url(),
            "https://samples.example.com/playlists/excel.yaml"
        );
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playground.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "host = \"WORD\"").unwrap();
        writeln!(file, "http_timeout_secs = 5").unwrap();
        writeln!(file, "github_token = \"ghp_test\"").unwrap();
        writeln!(file, "log_profile = \"production\"").unwrap();

        let config =
            PlaygroundConfig::load_with(Some(&path), "PLAYGROUND_UNIT_TEST_UNUSED").unwrap();

        assert_eq!(config.host, "WORD");
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.log_profile, Profile::Production);
        assert_eq!(
            config.github_token.as_ref().map(|t| t.expose().as_str()),
            Some("ghp_test")
        );
        // untouched keys keep their defaults
        assert_eq!(config.runner_url, DEFAULT_RUNNER_URL);
        assert!(!format!("{:?}", config).contains("ghp_test"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = PlaygroundConfig::load_with(
            Some(Path::new("/nonexistent/playground.toml")),
            "PLAYGROUND_UNIT_TEST_UNUSED",
        )
        .unwrap();
        assert_eq!(config.host, "WEB");
    }
}
