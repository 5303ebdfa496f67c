//! Leaderboard pagination controller.
//!
//! Owns the current page and total page count and re-fetches whenever the
//! page changes. State lives in a `watch` channel so the presentation layer
//! can subscribe to it; it only changes through the transitions below.
//!
//! Every fetch takes a request token. A response is applied only if its
//! token is still the latest one issued, so a slow response for an old page
//! can never overwrite a newer one.

use crate::source::{DatasetSeeder, LeaderboardSource};
use crate::types::{FailureNotice, LeaderboardView, LoadStatus, NavigationOutcome, PaginationState};
use rankboard_client::{ClientError, SeedResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Drives the leaderboard view for the lifetime of the screen.
pub struct LeaderboardController<S> {
    source: S,
    view: watch::Sender<LeaderboardView>,
    latest_request: AtomicU64,
}

impl<S: LeaderboardSource> LeaderboardController<S> {
    /// Create a controller in its initial state: page 1 of 1, loading.
    ///
    /// Call [`load_initial`](Self::load_initial) to perform the first fetch.
    pub fn new(source: S) -> Self {
        let (view, _) = watch::channel(LeaderboardView::default());
        Self {
            source,
            view,
            latest_request: AtomicU64::new(0),
        }
    }

    /// Subscribe to view changes.
    pub fn subscribe(&self) -> watch::Receiver<LeaderboardView> {
        self.view.subscribe()
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> LeaderboardView {
        self.view.borrow().clone()
    }

    pub fn pagination(&self) -> PaginationState {
        self.view.borrow().pagination
    }

    /// Fetch page 1 regardless of the current bounds.
    pub async fn load_initial(&self) -> NavigationOutcome {
        self.load(1).await
    }

    /// Navigate to `page`.
    ///
    /// Targets outside `1..=total_pages` are ignored without fetching.
    pub async fn go_to_page(&self, page: u32) -> NavigationOutcome {
        let pagination = self.pagination();
        if !pagination.contains(page) {
            debug!(
                requested = page,
                total_pages = pagination.total_pages,
                "Ignoring out-of-range page request"
            );
            return NavigationOutcome::OutOfRange { requested: page };
        }

        self.load(page).await
    }

    pub async fn next(&self) -> NavigationOutcome {
        let current = self.pagination().current_page;
        self.go_to_page(current.saturating_add(1)).await
    }

    pub async fn previous(&self) -> NavigationOutcome {
        let current = self.pagination().current_page;
        self.go_to_page(current.saturating_sub(1)).await
    }

    /// Re-fetch the current page.
    pub async fn refresh(&self) -> NavigationOutcome {
        let current = self.pagination().current_page;
        self.go_to_page(current).await
    }

    /// Seed the dataset, then reload from page 1.
    ///
    /// A seeding failure is returned without touching the view.
    pub async fn seed_and_reload<D: DatasetSeeder + ?Sized>(
        &self,
        seeder: &D,
    ) -> Result<(SeedResponse, NavigationOutcome), ClientError> {
        let seeded = seeder.seed().await?;
        info!(total = seeded.total, "Dataset seeded, reloading leaderboard");

        let outcome = self.load(1).await;
        Ok((seeded, outcome))
    }

    async fn load(&self, page: u32) -> NavigationOutcome {
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.view
            .send_modify(|view| view.pagination.status = LoadStatus::Loading);

        debug!(page, token, "Loading leaderboard page");
        let mut page = page;
        let result = loop {
            let result = self.source.fetch_page(page).await;
            // The population shrank below `page`: fetch the last page that still exists
            let shrunk_to = match &result {
                Ok(fetched) if fetched.total_pages.max(1) < page => {
                    Some(fetched.total_pages.max(1))
                }
                _ => None,
            };
            match shrunk_to {
                Some(last) if self.latest_request.load(Ordering::SeqCst) == token => {
                    warn!(
                        page,
                        total_pages = last,
                        "Page no longer exists, loading last page"
                    );
                    page = last;
                }
                _ => break result,
            }
        };

        let mut outcome = NavigationOutcome::Superseded { page };
        self.view.send_if_modified(|view| {
            if self.latest_request.load(Ordering::SeqCst) != token {
                debug!(page, token, "Discarding superseded leaderboard response");
                return false;
            }

            match result {
                Ok(fetched) => {
                    let total_pages = fetched.total_pages.max(1);
                    let current_page = page.min(total_pages);

                    debug!(
                        page = current_page,
                        total_pages,
                        users = fetched.users.len(),
                        "Leaderboard page applied"
                    );

                    view.pagination = PaginationState {
                        current_page,
                        total_pages,
                        status: LoadStatus::Ready,
                    };
                    view.users = fetched.users;
                    view.total = fetched.total;
                    view.notice = None;

                    outcome = NavigationOutcome::Loaded {
                        page: current_page,
                        total_pages,
                    };
                }
                Err(err) => {
                    warn!(page, error = %err, "Failed to load leaderboard");

                    view.pagination.status = LoadStatus::Failed;
                    view.notice = Some(if view.users.is_empty() {
                        FailureNotice::SeedRequired(err.clone())
                    } else {
                        FailureNotice::Error(err.clone())
                    });

                    outcome = NavigationOutcome::Failed(err);
                }
            }

            true
        });

        outcome
    }
}
