//! Rankboard - View State
//!
//! Platform-agnostic state machines behind the leaderboard and search
//! screens. Rendering is left to the host UI, which subscribes to the views.
//!
//! This crate provides:
//! - [`LeaderboardController`]: current page, total pages, bounded
//!   navigation, refresh, and stale-response protection
//! - [`SearchSession`]: blank-query rejection and results keyed to the
//!   latest query
//! - Source traits so the state machines can run against any backend
//!
//! # Example
//!
//! ```ignore
//! use rankboard_client::{ClientConfig, RankboardClient, RuntimeContext};
//! use rankboard_state::{FailureNotice, LeaderboardController};
//!
//! let client = RankboardClient::new(ClientConfig::for_context(&RuntimeContext::Native))?;
//! let controller = LeaderboardController::new(client.clone());
//!
//! controller.load_initial().await;
//! if let Some(FailureNotice::SeedRequired(_)) = controller.view().notice {
//!     controller.seed_and_reload(&client).await?;
//! }
//!
//! controller.next().await;
//! ```

mod controller;
mod search;
mod source;
mod types;

pub use controller::LeaderboardController;
pub use search::SearchSession;
pub use source::{DatasetSeeder, LeaderboardSource, UserSearch};
pub use types::{
    FailureNotice, LeaderboardView, LoadStatus, NavigationOutcome, PaginationState, SearchOutcome,
    SearchView,
};
