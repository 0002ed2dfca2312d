use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::modules::anime::Anime;
use crate::modules::query::{FilterState, QueryMode};
use crate::shared::utils::Debouncer;

use super::service::{BrowseService, QueryOutcome};

/// Discriminated query state delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    /// Nothing to show: initial state, or a deliberate no-request outcome.
    #[default]
    Idle,
    Loading,
    Ready(Vec<Anime>),
    Error(String),
}

/// A live browsing session: debounced filter input on one side, query
/// state transitions on the other.
///
/// Filter snapshots pushed in rapid succession supersede each other; only
/// the latest stable snapshot reaches the service. An in-flight query is
/// dropped the moment a newer stable snapshot arrives, so a superseded
/// generation can never publish visible state.
pub struct BrowseSession {
    debouncer: Debouncer<FilterState>,
    state_rx: watch::Receiver<QueryState>,
    cancel: CancellationToken,
}

impl BrowseSession {
    pub fn start(service: Arc<BrowseService>, mode: QueryMode, debounce: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (debouncer, mut stable_rx) =
            Debouncer::spawn(debounce, cancel.child_token());
        let (state_tx, state_rx) = watch::channel(QueryState::default());

        let loop_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut pending: Option<FilterState> = None;
            loop {
                let filter = match pending.take() {
                    Some(filter) => filter,
                    None => tokio::select! {
                        _ = loop_cancel.cancelled() => break,
                        stable = stable_rx.recv() => match stable {
                            Some(filter) => filter,
                            None => break,
                        },
                    },
                };

                let _ = state_tx.send(QueryState::Loading);

                // Race the query against newer input: a fresher snapshot
                // cancels the in-flight fetch by dropping its future.
                let outcome = tokio::select! {
                    _ = loop_cancel.cancelled() => break,
                    newer = stable_rx.recv() => {
                        match newer {
                            Some(filter) => {
                                debug!("Superseding in-flight query with newer filter state");
                                pending = Some(filter);
                                continue;
                            }
                            None => break,
                        }
                    }
                    outcome = service.run_query(&filter, mode) => outcome,
                };

                let next_state = match outcome {
                    Ok(QueryOutcome::Ready(items)) => QueryState::Ready(items),
                    Ok(QueryOutcome::Noop) => QueryState::Idle,
                    Err(e) => QueryState::Error(e.to_string()),
                };
                let _ = state_tx.send(next_state);
            }
            debug!("Browse session loop stopped");
        });

        Self {
            debouncer,
            state_rx,
            cancel,
        }
    }

    /// Feed a new filter snapshot; it replaces any snapshot still waiting
    /// out the debounce interval.
    pub fn update_filter(&self, filter: FilterState) {
        self.debouncer.push(filter);
    }

    /// Subscribe to query state transitions.
    pub fn state(&self) -> watch::Receiver<QueryState> {
        self.state_rx.clone()
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for BrowseSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
