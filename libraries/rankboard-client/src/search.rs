//! Username search.

use crate::error::{classify, Result};
use crate::transport::HttpTransport;
use crate::types::User;
use tracing::{debug, warn};

/// Looks up users by (partial) username.
pub struct SearchService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> SearchService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Search users matching `query`.
    ///
    /// The query is sent exactly as given, empty or not; callers are expected
    /// to reject blank input before getting here. Zero matches, including a
    /// `null` body, is an empty vector rather than an error.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        debug!(query = %query, "Searching users");

        let users: Option<Vec<User>> = self
            .transport
            .get_json("/search", &[("q", query)])
            .await
            .map_err(|failure| {
                let err = classify(failure);
                warn!(query = %query, error = %err, "Search users failed");
                err
            })?;

        let users = users.unwrap_or_default();
        debug!(results = users.len(), "Search complete");
        Ok(users)
    }
}
