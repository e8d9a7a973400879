//! Fetch orchestration with latest-generation-wins semantics.
//!
//! There is no request cancellation: every issued request eventually
//! resolves, and ordering is enforced when the response comes back.

use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::PageEnvelope;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer generation was issued meanwhile; the view was not touched.
    Superseded,
}

#[derive(Debug, Clone)]
pub struct FetchOrchestrator<T> {
    last_key: Option<String>,
    latest: u64,
    snapshot: Option<Arc<PageEnvelope<T>>>,
    loading: bool,
    last_error: Option<FetchError>,
}

impl<T> Default for FetchOrchestrator<T> {
    fn default() -> Self {
        Self {
            last_key: None,
            latest: 0,
            snapshot: None,
            loading: false,
            last_error: None,
        }
    }
}

impl<T> FetchOrchestrator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<Arc<PageEnvelope<T>>> {
        self.snapshot.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Issues a new generation unless `query` has the same key as the last
    /// issued one. Rows from the previous snapshot stay visible while loading.
    pub fn begin(&mut self, query: &ListQuery) -> Option<FetchTicket> {
        let key = query.cache_key();
        if self.last_key.as_deref() == Some(key.as_str()) {
            log::trace!("fetch skipped, key unchanged: {}", key);
            return None;
        }
        Some(self.issue(key))
    }

    /// Re-issues the current key even when nothing changed.
    pub fn refresh(&mut self, query: &ListQuery) -> FetchTicket {
        self.issue(query.cache_key())
    }

    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageEnvelope<T>, FetchError>,
    ) -> FetchOutcome {
        if ticket.generation != self.latest {
            log::debug!(
                "fetch generation {} superseded by {}, response dropped",
                ticket.generation,
                self.latest
            );
            return FetchOutcome::Superseded;
        }
        self.loading = false;

        let checked = result.and_then(|envelope| {
            envelope
                .validate()
                .map_err(|e| FetchError::Malformed(e.to_string()))?;
            Ok(envelope)
        });

        match checked {
            Ok(envelope) => {
                log::debug!(
                    "fetch generation {} applied: {} of {} rows",
                    ticket.generation,
                    envelope.pagination.count,
                    envelope.pagination.total
                );
                self.snapshot = Some(Arc::new(envelope));
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::error!("fetch generation {} failed: {}", ticket.generation, e);
                self.last_error = Some(e);
                FetchOutcome::Failed
            }
        }
    }

    fn issue(&mut self, key: String) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        log::debug!("fetch generation {} issued for {}", self.latest, key);
        self.last_key = Some(key);
        FetchTicket {
            generation: self.latest,
        }
    }
}
