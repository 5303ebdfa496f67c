//! Paged leaderboard queries.

use crate::error::{classify, Result};
use crate::transport::HttpTransport;
use crate::types::{LeaderboardPage, LeaderboardResponse};
use tracing::{debug, warn};

/// Fetches one page of ranked users at a time.
///
/// No caching: every call goes to the server.
pub struct LeaderboardService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> LeaderboardService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Fetch the 1-based `page` of the leaderboard.
    ///
    /// Missing `users` yields an empty page and a missing `total_pages`
    /// yields 1. Failures are classified and returned as-is, never retried.
    pub async fn fetch_page(&self, page: u32) -> Result<LeaderboardPage> {
        debug!(page, "Fetching leaderboard page");

        let response: LeaderboardResponse = self
            .transport
            .get_json("/leaderboard", &[("page", page)])
            .await
            .map_err(|failure| {
                let err = classify(failure);
                warn!(page, error = %err, "Get leaderboard failed");
                err
            })?;

        let page = LeaderboardPage::from_response(page, response);

        debug!(
            page = page.page,
            total_pages = page.total_pages,
            users = page.users.len(),
            "Leaderboard loaded"
        );

        Ok(page)
    }
}
