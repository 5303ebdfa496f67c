//! Rankboard Client
//!
//! HTTP client library for the Rankboard leaderboard API.
//!
//! # Features
//!
//! - **Leaderboard**: fetch ranked users one page at a time
//! - **Search**: look up users, and their global rank, by username
//! - **Admin**: seed the synthetic dataset, update a rating
//! - **Errors**: transport failures classified into a small taxonomy
//!
//! # Example
//!
//! ```ignore
//! use rankboard_client::{ClientConfig, ErrorKind, RankboardClient, RuntimeContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::for_context(&RuntimeContext::browser("localhost"));
//!     let client = RankboardClient::new(config)?;
//!
//!     match client.fetch_leaderboard(1).await {
//!         Ok(page) => println!("{} users on page 1", page.users.len()),
//!         Err(e) if e.kind() == ErrorKind::Timeout => println!("slow server"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod admin;
mod client;
mod config;
mod error;
mod leaderboard;
mod search;
mod transport;
mod types;

// Re-export main types
pub use client::RankboardClient;
pub use self::config::{
    ClientConfig, RuntimeContext, DEFAULT_TIMEOUT, LAN_API_URL, LOCALHOST_API_URL,
    PRODUCTION_API_URL,
};
pub use error::{classify, ClientError, ConfigError, ErrorKind, Result, TransportFailure};
pub use types::{
    LeaderboardPage, LeaderboardResponse, MessageResponse, SeedResponse, UpdateRatingRequest,
    User,
};

// Re-export services for direct use if needed
pub use admin::AdminService;
pub use leaderboard::LeaderboardService;
pub use search::SearchService;
pub use transport::HttpTransport;
