//! Search session: the state container between the aggregator and a rendering layer
//!
//! Every query change bumps a generation counter. A fetch may only publish its
//! outcome while its generation is still the newest one, so a slow response to
//! an old query never overwrites the results of a newer one.

use super::aggregator::Aggregator;
use super::state::{Generation, SearchState};
use crate::config::SearchSettings;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

struct Current {
    generation: Generation,
    query: String,
    debounce: Duration,
}

struct Inner {
    aggregator: Aggregator,
    // the result slot is only written while this lock is held
    current: Mutex<Current>,
    state: watch::Sender<SearchState>,
}

/// Shared handle to one search screen's state
#[derive(Clone)]
pub struct SearchSession {
    inner: Arc<Inner>,
}

impl SearchSession {
    /// Create a new session with no debounce
    pub fn new(aggregator: Aggregator) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);

        Self {
            inner: Arc::new(Inner {
                aggregator,
                current: Mutex::new(Current {
                    generation: 0,
                    query: String::new(),
                    debounce: Duration::ZERO,
                }),
                state,
            }),
        }
    }

    /// Create a session using the threshold and debounce from settings
    pub fn with_settings(aggregator: Aggregator, settings: &SearchSettings) -> Self {
        Self::new(aggregator.with_min_query_length(settings.min_query_length))
            .with_debounce(Duration::from_millis(settings.debounce_ms))
    }

    /// Set the quiet period between a query change and its fetch.
    ///
    /// Shared by every clone of the session; fetches already waiting keep the
    /// period they started with.
    pub fn with_debounce(self, debounce: Duration) -> Self {
        self.set_debounce(debounce);
        self
    }

    pub fn set_debounce(&self, debounce: Duration) {
        self.lock().debounce = debounce;
    }

    pub fn debounce(&self) -> Duration {
        self.lock().debounce
    }

    /// Current state snapshot
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    pub fn current_generation(&self) -> Generation {
        self.lock().generation
    }

    /// Last query handed to the session
    pub fn current_query(&self) -> String {
        self.lock().query.clone()
    }

    /// Change the query and fetch in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_query(&self, query: impl Into<String>) -> Generation {
        let (generation, fetch) = self.begin(query.into());
        if let Some(query) = fetch {
            let session = self.clone();
            tokio::spawn(async move {
                session.execute(generation, query).await;
            });
        }
        generation
    }

    /// Change the query and wait for its outcome.
    ///
    /// Returns the state after this query settled, which is the newer state if
    /// another query superseded this one meanwhile.
    pub async fn search(&self, query: impl Into<String>) -> SearchState {
        let (generation, fetch) = self.begin(query.into());
        if let Some(query) = fetch {
            self.execute(generation, query).await;
        }
        self.state()
    }

    /// Re-run the current query in the background
    pub fn retry(&self) -> Generation {
        let query = self.current_query();
        self.set_query(query)
    }

    /// Re-run the current query and wait for its outcome
    pub async fn retry_now(&self) -> SearchState {
        let query = self.current_query();
        self.search(query).await
    }

    /// Reset to Idle, invalidating anything in flight
    pub fn clear(&self) -> Generation {
        self.begin(String::new()).0
    }

    fn lock(&self) -> MutexGuard<'_, Current> {
        // a panic while holding the lock cannot leave Current half-written
        self.inner
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Bump the generation and publish the immediate state for `query`
    fn begin(&self, query: String) -> (Generation, Option<String>) {
        let mut current = self.lock();
        current.generation += 1;
        current.query = query.clone();
        let generation = current.generation;

        if self.inner.aggregator.qualifies(&query) {
            self.inner.state.send_replace(SearchState::Loading {
                query: query.clone(),
            });
            (generation, Some(query))
        } else {
            self.inner.state.send_replace(SearchState::Idle);
            (generation, None)
        }
    }

    async fn execute(&self, generation: Generation, query: String) {
        let debounce = self.debounce();
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
            if self.current_generation() != generation {
                debug!("Query '{}' superseded during debounce", query);
                return;
            }
        }

        let next = match self.inner.aggregator.search(&query).await {
            Ok(items) => SearchState::Success {
                query: query.clone(),
                items,
            },
            Err(e) => SearchState::Error {
                query: query.clone(),
                message: e.user_message(),
            },
        };

        let current = self.lock();
        if current.generation != generation {
            debug!(
                "Discarding stale result for '{}' (generation {} < {})",
                query, generation, current.generation
            );
            return;
        }
        self.inner.state.send_replace(next);
    }
}
