//! State records observed by the presentation layer.

use rankboard_client::{ClientError, User};

/// Lifecycle of the page currently being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Page position of the leaderboard view.
///
/// Always `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub status: LoadStatus,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            status: LoadStatus::Loading,
        }
    }
}

impl PaginationState {
    /// Whether `page` is a valid navigation target.
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// How a failed load should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureNotice {
    /// Nothing was on screen; prompt the user to populate the dataset
    SeedRequired(ClientError),
    /// Data is still on screen; show the error alongside it
    Error(ClientError),
}

impl FailureNotice {
    pub fn error(&self) -> &ClientError {
        match self {
            Self::SeedRequired(e) | Self::Error(e) => e,
        }
    }
}

/// Everything the leaderboard screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardView {
    pub pagination: PaginationState,
    /// Users of `pagination.current_page`, kept through failed loads
    pub users: Vec<User>,
    /// Population size from the last successful load
    pub total: Option<u64>,
    /// Set by a failed load, cleared by the next successful one
    pub notice: Option<FailureNotice>,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Page fetched and applied
    Loaded { page: u32, total_pages: u32 },
    /// Target outside `1..=total_pages`; nothing was fetched
    OutOfRange { requested: u32 },
    /// A newer request was issued before this one completed
    Superseded { page: u32 },
    /// Fetch failed; previous page, total and users are kept
    Failed(ClientError),
}

/// Everything the search screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    /// Query that produced `results` (or `error`)
    pub query: Option<String>,
    pub results: Vec<User>,
    /// True once any search has been issued
    pub searched: bool,
    pub loading: bool,
    pub error: Option<ClientError>,
}

/// Result of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input; no request was sent
    EmptyQuery,
    /// Matches for `query`, possibly none
    Found { query: String, users: Vec<User> },
    /// A newer search was issued before this one completed
    Superseded { query: String },
    Failed(ClientError),
}
