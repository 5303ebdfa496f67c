//! HTTP transport bound to a single base endpoint.
//!
//! The transport performs requests and decodes JSON; it never interprets or
//! recovers from failures. Everything it returns is a [`TransportFailure`]
//! for the classifier to map.

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportFailure};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

type TransportResult<T> = std::result::Result<T, TransportFailure>;

/// Configured HTTP client with a fixed base URL, timeout and JSON headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.normalized_url()?;

        if config.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "timeout must be greater than zero".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(format!("Rankboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with the given query parameters and decode the JSON body.
    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: &Q) -> TransportResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        Self::decode(response).await
    }

    /// POST `path` with an optional JSON body and decode the JSON reply.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: Option<&B>) -> TransportResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(url = %url, "POST");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// GET an absolute path on the server root, ignoring the body.
    ///
    /// Used for endpoints that live outside the API prefix.
    pub(crate) async fn get_root(&self, path: &str) -> TransportResult<()> {
        let url = url::Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| TransportFailure::Other(e.to_string()))?;
        debug!(url = %url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(TransportFailure::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> TransportResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(TransportFailure::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ClientConfig::new("http://localhost:8080/api").with_timeout(Duration::ZERO);
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn test_url_joins_path() {
        let config = ClientConfig::new("http://localhost:8080/api/");
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.base_url(), "http://localhost:8080/api");
        assert_eq!(transport.url("/leaderboard"), "http://localhost:8080/api/leaderboard");
        assert_eq!(transport.timeout(), Duration::from_secs(10));
    }
}
