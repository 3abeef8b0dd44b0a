//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.
//! Log output goes to stderr so command output on stdout stays clean.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is not set
const DEV_DIRECTIVES: &str =
    "playground_core=debug,playground_store=debug,playground_engine=debug,playground_cli=debug";
const PROD_DIRECTIVES: &str =
    "playground_core=info,playground_store=info,playground_engine=info,playground_cli=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; events are collected via `init_test_capture()`
///
/// # Example
///
/// ```
/// use playground_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = |directives: &str| {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
        };

        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter(DEV_DIRECTIVES))
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter(PROD_DIRECTIVES))
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };

        // Another subscriber (e.g. a test capture layer) already owns the global slot.
        if installed.is_err() {
            tracing::debug!(?profile, "global subscriber already set");
        }
    });
}
