//! Administrative operations.
//!
//! These act on the server's dataset rather than reading it. The client
//! performs no validation of its own; the server's rejections come back as
//! `ServerError`.

use crate::error::{classify, Result};
use crate::transport::HttpTransport;
use crate::types::{MessageResponse, SeedResponse, UpdateRatingRequest};
use tracing::{debug, info, warn};

/// Admin client for a Rankboard server.
pub struct AdminService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> AdminService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Ask the server to generate its synthetic population.
    ///
    /// The server only seeds an empty store; otherwise it reports the
    /// existing total.
    pub async fn seed_database(&self) -> Result<SeedResponse> {
        debug!("Seeding database");

        let response: SeedResponse = self
            .transport
            .post_json("/seed", None::<&()>)
            .await
            .map_err(|failure| {
                let err = classify(failure);
                warn!(error = %err, "Seed database failed");
                err
            })?;

        info!(total = response.total, message = %response.message, "Database seeded");
        Ok(response)
    }

    /// Set a user's rating.
    pub async fn update_rating(&self, user_id: i64, rating: i64) -> Result<MessageResponse> {
        debug!(user_id, rating, "Updating rating");

        let request = UpdateRatingRequest { user_id, rating };

        let response: MessageResponse = self
            .transport
            .post_json("/update-rating", Some(&request))
            .await
            .map_err(|failure| {
                let err = classify(failure);
                warn!(user_id, rating, error = %err, "Update rating failed");
                err
            })?;

        info!(user_id, rating, "Rating updated");
        Ok(response)
    }
}
