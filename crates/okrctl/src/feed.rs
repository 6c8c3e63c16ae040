//! Fetch orchestration for the dashboard.
//!
//! One fetch per filter change or manual refresh. State is published over a
//! watch channel; consumers render whatever the latest snapshot says.
//!
//! Every fetch is tagged with a monotonically increasing sequence number.
//! Starting a newer fetch advances a watermark that both aborts older
//! in-flight requests (the fetch future is dropped, which cancels the
//! underlying HTTP request) and blocks older results from committing, so a
//! stale response can never overwrite a newer one.

use okr_common::{adapt, Category, OkrFilter};
use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Observable fetch state exposed to the rendering layer.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Orchestrates fetches through a caller-supplied fetch function and
/// publishes [`FetchState`] snapshots.
pub struct OkrFeed<F> {
    fetch: F,
    state_tx: watch::Sender<FetchState>,
    seq: AtomicU64,
    committed: AtomicU64,
    watermark_tx: watch::Sender<u64>,
}

impl<F, Fut> OkrFeed<F>
where
    F: Fn(OkrFilter) -> Fut,
    Fut: Future<Output = anyhow::Result<Value>>,
{
    pub fn new(fetch: F) -> Self {
        let (state_tx, _) = watch::channel(FetchState::default());
        let (watermark_tx, _) = watch::channel(0);
        Self {
            fetch,
            state_tx,
            seq: AtomicU64::new(0),
            committed: AtomicU64::new(0),
            watermark_tx,
        }
    }

    /// Subscribe to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    /// Run one fetch for the given filter set. Any failure is converted to a
    /// display string in the error state; no automatic retry. If a newer
    /// refresh starts while this one is in flight, this one is aborted and
    /// leaves the state untouched.
    pub async fn refresh(&self, filter: &OkrFilter) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        // The watermark never goes backwards, even if two refreshes
        // interleave their sends.
        self.watermark_tx
            .send_modify(|latest| *latest = (*latest).max(seq));
        let mut watermark = self.watermark_tx.subscribe();

        self.state_tx.send_modify(|state| state.loading = true);

        let outcome = tokio::select! {
            result = (self.fetch)(filter.clone()) => Some(result),
            _ = watermark.wait_for(|latest| *latest > seq) => None,
        };

        let result = match outcome {
            Some(result) => result,
            None => {
                debug!("fetch {} superseded in flight, dropping", seq);
                return;
            }
        };

        // Commit only if nothing newer has committed meanwhile.
        if self.committed.fetch_max(seq, Ordering::SeqCst) > seq {
            debug!("fetch {} finished after a newer one, discarding result", seq);
            return;
        }

        match result {
            Ok(payload) => {
                let categories = adapt(&payload);
                debug!("fetch {} committed {} categories", seq, categories.len());
                self.state_tx.send_modify(|state| {
                    state.categories = categories;
                    state.error = None;
                    state.loading = false;
                });
            }
            Err(e) => {
                self.state_tx.send_modify(|state| {
                    state.error = Some(e.to_string());
                    state.loading = false;
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_successful_fetch_publishes_categories() {
        let feed = OkrFeed::new(|_filter: OkrFilter| async {
            Ok(json!({"okrs": [{"id": "o1", "title": "Grow ARR", "category": "Sales"}]}))
        });

        feed.refresh(&OkrFilter::default()).await;

        let state = feed.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.categories[0].name, "Sales");
    }

    #[tokio::test]
    async fn test_failure_surfaces_display_string() {
        let feed = OkrFeed::new(|_filter: OkrFilter| async {
            Err(anyhow::anyhow!("Server returned HTTP 503"))
        });

        feed.refresh(&OkrFilter::default()).await;

        let state = feed.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Server returned HTTP 503"));
    }

    #[tokio::test]
    async fn test_error_keeps_last_good_result() {
        let feed = OkrFeed::new(|filter: OkrFilter| async move {
            if filter.page == Some(2) {
                Err(anyhow::anyhow!("boom"))
            } else {
                Ok(json!({"okrs": [{"id": "o1", "category": "Sales"}]}))
            }
        });

        feed.refresh(&OkrFilter::default()).await;
        feed.refresh(&OkrFilter {
            page: Some(2),
            ..OkrFilter::default()
        })
        .await;

        let state = feed.state();
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.categories.len(), 1, "stale data stays visible");
    }

    #[tokio::test]
    async fn test_newer_fetch_supersedes_older_in_flight() {
        let feed = OkrFeed::new(|filter: OkrFilter| async move {
            if filter.page == Some(1) {
                tokio::time::sleep(Duration::from_millis(80)).await;
                Ok(json!({"okrs": [{"id": "stale", "title": "stale"}]}))
            } else {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok(json!({"okrs": [{"id": "fresh", "title": "fresh"}]}))
            }
        });

        let old_filter = OkrFilter {
            page: Some(1),
            ..OkrFilter::default()
        };
        tokio::join!(feed.refresh(&old_filter), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            feed.refresh(&OkrFilter::default()).await;
        });

        let state = feed.state();
        assert!(!state.loading);
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.categories[0].objectives[0].id, "fresh");
    }

    #[tokio::test]
    async fn test_loading_is_observable_while_in_flight() {
        let feed = OkrFeed::new(|_filter: OkrFilter| async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Ok(json!({"okrs": []}))
        });
        let mut rx = feed.subscribe();

        let filter = OkrFilter::default();
        tokio::join!(feed.refresh(&filter), async {
            let state = rx.wait_for(|state| state.loading).await.unwrap();
            assert!(state.loading);
        });

        assert!(!feed.state().loading);
    }
}
