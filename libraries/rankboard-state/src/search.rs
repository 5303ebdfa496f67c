//! Search session for the username lookup screen.

use crate::source::UserSearch;
use crate::types::{SearchOutcome, SearchView};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Issues searches and keeps the results of the latest one.
///
/// Blank input is rejected here, before any request. Each search takes a
/// token and only the most recently issued search may update the view.
pub struct SearchSession<S> {
    source: S,
    view: watch::Sender<SearchView>,
    latest_request: AtomicU64,
}

impl<S: UserSearch> SearchSession<S> {
    pub fn new(source: S) -> Self {
        let (view, _) = watch::channel(SearchView::default());
        Self {
            source,
            view,
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> SearchView {
        self.view.borrow().clone()
    }

    /// Search for `input`.
    ///
    /// The input is forwarded untouched once it is known not to be blank.
    /// A failure clears the previous results: they belong to another query.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        if input.trim().is_empty() {
            debug!("Ignoring blank search");
            return SearchOutcome::EmptyQuery;
        }

        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.send_modify(|view| {
            view.loading = true;
            view.searched = true;
        });

        let result = self.source.search_users(input).await;

        let mut outcome = SearchOutcome::Superseded {
            query: input.to_string(),
        };
        self.view.send_if_modified(|view| {
            if self.latest_request.load(Ordering::SeqCst) != token {
                debug!(query = %input, token, "Discarding superseded search results");
                return false;
            }

            view.loading = false;
            view.query = Some(input.to_string());

            match result {
                Ok(users) => {
                    debug!(query = %input, results = users.len(), "Search results applied");
                    view.results.clone_from(&users);
                    view.error = None;
                    outcome = SearchOutcome::Found {
                        query: input.to_string(),
                        users,
                    };
                }
                Err(err) => {
                    warn!(query = %input, error = %err, "Search failed");
                    view.results.clear();
                    view.error = Some(err.clone());
                    outcome = SearchOutcome::Failed(err);
                }
            }

            true
        });

        outcome
    }
}
