//! Client configuration and base endpoint resolution.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Hosted API used by every browser session that is not on localhost.
pub const PRODUCTION_API_URL: &str = "https://your-app-name.up.railway.app/api";

/// API served by a backend on the same machine as the browser.
pub const LOCALHOST_API_URL: &str = "http://localhost:8080/api";

/// Development machine as seen from a phone on the same LAN.
pub const LAN_API_URL: &str = "http://10.210.140.137:8080/api";

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Prefix of the environment variables that override configuration.
const ENV_PREFIX: &str = "RANKBOARD";

/// Where the client is running, used to pick the base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeContext {
    /// Browser-like host that knows the page's hostname
    Browser { hostname: String },
    /// Native shell with no page location (e.g. a mobile app)
    Native,
}

impl RuntimeContext {
    pub fn browser(hostname: impl Into<String>) -> Self {
        Self::Browser {
            hostname: hostname.into(),
        }
    }

    /// Base endpoint for this context.
    pub fn resolve_base_url(&self) -> &'static str {
        match self {
            Self::Browser { hostname } if hostname != "localhost" => PRODUCTION_API_URL,
            Self::Browser { .. } => LOCALHOST_API_URL,
            Self::Native => LAN_API_URL,
        }
    }
}

/// Configuration for connecting to a Rankboard server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL including the API prefix (e.g. "http://localhost:8080/api")
    pub base_url: String,
    /// Timeout for each request
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Settings {
    base_url: String,
    timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config for an explicit base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a config whose base URL is resolved from the runtime context.
    pub fn for_context(context: &RuntimeContext) -> Self {
        Self::new(context.resolve_base_url())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Later sources win: the endpoint resolved from `context` and the default
    /// timeout, then `file` if it exists, then `RANKBOARD_BASE_URL` and
    /// `RANKBOARD_TIMEOUT_SECS`.
    pub fn load(context: &RuntimeContext, file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder()
            .set_default("base_url", context.resolve_base_url())?
            .set_default("timeout_secs", DEFAULT_TIMEOUT.as_secs())?;

        if let Some(path) = file {
            if path.exists() {
                debug!(path = %path.display(), "Loading client configuration file");
                settings = settings.add_source(config::File::from(path));
            }
        }

        settings = settings
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings: Settings = settings.build()?.try_deserialize()?;

        if settings.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(Self {
            base_url: settings.base_url,
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    /// Validate the base URL and strip trailing slashes.
    pub(crate) fn normalized_url(&self) -> Result<String, ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = self.base_url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        url::Url::parse(&url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_browser_on_remote_host_uses_production() {
        let ctx = RuntimeContext::browser("leaderboard.example.com");
        assert_eq!(ctx.resolve_base_url(), PRODUCTION_API_URL);
    }

    #[test]
    fn test_browser_on_localhost_uses_local_backend() {
        let ctx = RuntimeContext::browser("localhost");
        assert_eq!(ctx.resolve_base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_native_uses_lan_address() {
        assert_eq!(RuntimeContext::Native.resolve_base_url(), LAN_API_URL);
    }

    #[test]
    fn test_for_context_uses_default_timeout() {
        let config = ClientConfig::for_context(&RuntimeContext::browser("localhost"));
        assert_eq!(config.base_url, LOCALHOST_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_normalized_url() {
        let config = ClientConfig::new("http://localhost:8080/api//");
        assert_eq!(config.normalized_url().unwrap(), "http://localhost:8080/api");

        assert!(ClientConfig::new("").normalized_url().is_err());
        assert!(ClientConfig::new("localhost:8080").normalized_url().is_err());
        assert!(ClientConfig::new("ftp://example.com").normalized_url().is_err());
    }

    #[test]
    fn test_load_without_file_uses_context() {
        let config = ClientConfig::load(&RuntimeContext::Native, None).unwrap();
        // Environment overrides are not set in the test environment.
        if std::env::var("RANKBOARD_BASE_URL").is_err() {
            assert_eq!(config.base_url, LAN_API_URL);
        }
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "base_url = \"http://staging.example.com/api\"").unwrap();
        writeln!(file, "timeout_secs = 3").unwrap();

        let config = ClientConfig::load(&RuntimeContext::Native, Some(file.path())).unwrap();

        if std::env::var("RANKBOARD_BASE_URL").is_err() {
            assert_eq!(config.base_url, "http://staging.example.com/api");
        }
        if std::env::var("RANKBOARD_TIMEOUT_SECS").is_err() {
            assert_eq!(config.timeout, Duration::from_secs(3));
        }
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();

        let result = ClientConfig::load(&RuntimeContext::Native, Some(file.path()));
        if std::env::var("RANKBOARD_TIMEOUT_SECS").is_err() {
            assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
        }
    }

    #[test]
    fn test_load_missing_file_is_ignored() {
        let config = ClientConfig::load(
            &RuntimeContext::browser("localhost"),
            Some(Path::new("/nonexistent/rankboard.toml")),
        );
        assert!(config.is_ok());
    }
}
