//! Data sources the state machines pull from.
//!
//! These traits decouple the controller and search session from HTTP.
//! [`RankboardClient`] implements all of them; tests substitute mocks.

use async_trait::async_trait;
use rankboard_client::{LeaderboardPage, RankboardClient, Result, SeedResponse, User};

/// Fetches one leaderboard page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<LeaderboardPage>;
}

/// Looks users up by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearch: Send + Sync {
    async fn search_users(&self, query: &str) -> Result<Vec<User>>;
}

/// Populates an empty dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSeeder: Send + Sync {
    async fn seed(&self) -> Result<SeedResponse>;
}

#[async_trait]
impl LeaderboardSource for RankboardClient {
    async fn fetch_page(&self, page: u32) -> Result<LeaderboardPage> {
        self.fetch_leaderboard(page).await
    }
}

#[async_trait]
impl UserSearch for RankboardClient {
    async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        RankboardClient::search_users(self, query).await
    }
}

#[async_trait]
impl DatasetSeeder for RankboardClient {
    async fn seed(&self) -> Result<SeedResponse> {
        self.seed_database().await
    }
}
