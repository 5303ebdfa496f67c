//! Main Rankboard client.

use crate::admin::AdminService;
use crate::config::ClientConfig;
use crate::error::{classify, ConfigError, Result};
use crate::leaderboard::LeaderboardService;
use crate::search::SearchService;
use crate::transport::HttpTransport;
use crate::types::{LeaderboardPage, SeedResponse, User};
use tracing::{debug, info, warn};

/// Main client for interacting with a Rankboard server.
///
/// Owns the configured transport and hands out the query services. The
/// client is cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use rankboard_client::{ClientConfig, RankboardClient, RuntimeContext};
///
/// let config = ClientConfig::for_context(&RuntimeContext::browser("localhost"));
/// let client = RankboardClient::new(config)?;
///
/// let page = client.fetch_leaderboard(1).await?;
/// println!("Page {} of {}", page.page, page.total_pages);
///
/// let matches = client.search_users("rahul").await?;
/// println!("Found {} users", matches.len());
/// ```
#[derive(Debug, Clone)]
pub struct RankboardClient {
    transport: HttpTransport,
}

impl RankboardClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;

        info!(
            base_url = %transport.base_url(),
            timeout_secs = transport.timeout().as_secs(),
            "Rankboard client configured"
        );

        Ok(Self { transport })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn leaderboard(&self) -> LeaderboardService<'_> {
        LeaderboardService::new(&self.transport)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.transport)
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(&self.transport)
    }

    /// Fetch one page of the leaderboard.
    pub async fn fetch_leaderboard(&self, page: u32) -> Result<LeaderboardPage> {
        self.leaderboard().fetch_page(page).await
    }

    /// Search users by username.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        self.search().search_users(query).await
    }

    /// Populate the server with its synthetic dataset.
    pub async fn seed_database(&self) -> Result<SeedResponse> {
        self.admin().seed_database().await
    }

    /// Check that the server is up.
    ///
    /// Hits the health endpoint at the server root, outside the API prefix.
    pub async fn test_connection(&self) -> Result<()> {
        debug!(base_url = %self.base_url(), "Testing server connection");

        self.transport.get_root("/health").await.map_err(|failure| {
            let err = classify(failure);
            warn!(error = %err, "Health check failed");
            err
        })?;

        info!(base_url = %self.base_url(), "Connected to server");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(RankboardClient::new(ClientConfig::new("https://example.com/api")).is_ok());
        assert!(RankboardClient::new(ClientConfig::new("http://localhost:8080/api")).is_ok());

        // Invalid URLs
        assert!(RankboardClient::new(ClientConfig::new("")).is_err());
        assert!(RankboardClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(RankboardClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = RankboardClient::new(ClientConfig::new("https://example.com/api/"))
            .expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.base_url(), "https://example.com/api");
    }
}
