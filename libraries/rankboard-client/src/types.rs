//! Types for Rankboard API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Users
// =============================================================================

/// A ranked participant as returned by the server.
///
/// `rank` is assigned by the server from a global ordering by `rating`; the
/// client treats it as authoritative and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub rating: i64,
    /// 1-based global position
    pub rank: u32,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Leaderboard Types
// =============================================================================

/// Raw body of `GET /leaderboard`.
///
/// Every field is optional on the wire; [`LeaderboardPage::from_response`]
/// applies the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub users: Option<Vec<User>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// One page of the leaderboard, in rank order.
///
/// Built fresh for every fetch. `total_pages` reflects the population at
/// fetch time and may differ between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub users: Vec<User>,
    /// 1-based page number
    pub page: u32,
    /// Always at least 1
    pub total_pages: u32,
    /// Population size, if the server reported it
    pub total: Option<u64>,
}

impl LeaderboardPage {
    /// Build a page from a server response to a request for `requested_page`.
    ///
    /// Missing users become an empty list. A missing or zero `total_pages`
    /// becomes 1 (the server reports 0 for an empty population). A missing
    /// `page` falls back to the page that was requested.
    pub fn from_response(requested_page: u32, response: LeaderboardResponse) -> Self {
        Self {
            users: response.users.unwrap_or_default(),
            page: response.page.unwrap_or(requested_page),
            total_pages: response.total_pages.unwrap_or(1).max(1),
            total: response.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

// =============================================================================
// Admin Types
// =============================================================================

/// Response from `POST /seed`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedResponse {
    pub message: String,
    /// Population size after seeding
    pub total: u64,
}

/// Request body for `POST /update-rating`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRatingRequest {
    pub user_id: i64,
    pub rating: i64,
}

/// Plain acknowledgement returned by admin endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, rank: u32) -> User {
        User {
            id,
            username: format!("user{id}"),
            rating: 1500,
            rank,
            created_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let response: LeaderboardResponse = serde_json::from_str("{}").unwrap();
        let page = LeaderboardPage::from_response(3, response);

        assert!(page.users.is_empty());
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_null_users_become_empty() {
        let response: LeaderboardResponse =
            serde_json::from_str(r#"{"users": null, "total": 0, "page": 1, "total_pages": 0}"#)
                .unwrap();
        let page = LeaderboardPage::from_response(1, response);

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, Some(0));
    }

    #[test]
    fn test_fields_taken_verbatim() {
        let response = LeaderboardResponse {
            users: Some(vec![user(7, 51), user(3, 52)]),
            total: Some(10_000),
            page: Some(2),
            total_pages: Some(200),
        };
        let page = LeaderboardPage::from_response(2, response);

        assert_eq!(page.users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![7, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 200);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_created_at_accepts_offsets() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "rahul", "rating": 1500, "rank": 1,
                "created_at": "2024-01-01T05:30:00.123456789+05:30"}"#,
        )
        .unwrap();

        assert_eq!(user.created_at.to_rfc3339(), "2024-01-01T00:00:00.123456789+00:00");
    }
}
