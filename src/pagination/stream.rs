//! Page retrieval loop
//!
//! Drives a [`Paginator`] against a [`PageSource`] one page at a time,
//! strictly sequentially, honoring cancellation and optional limits.

use super::types::{
    Interrupted, NextPage, PageRequest, PageSource, PaginationLimits, PaginationState, Paginator,
    Retrieval,
};
use crate::error::{Error, Result};
use futures::Stream;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Lazy, sequential walk over the pages of one endpoint
pub struct PageStream<S, P> {
    source: S,
    paginator: P,
    limits: PaginationLimits,
    cancel: Option<CancellationToken>,
    state: PaginationState,
    next: Option<PageRequest>,
    started: Option<Instant>,
}

impl<S, P> PageStream<S, P>
where
    S: PageSource,
    P: Paginator,
{
    /// Create a stream positioned before the first page
    pub fn new(source: S, paginator: P) -> Self {
        let state = PaginationState::new();
        let next = Some(paginator.first_request(&state));
        Self {
            source,
            paginator,
            limits: PaginationLimits::default(),
            cancel: None,
            state,
            next,
            started: None,
        }
    }

    /// Apply page, duration, and delay limits
    #[must_use]
    pub fn with_limits(mut self, limits: PaginationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Observe a cancellation token between and during page fetches
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Whether no further page will be requested
    pub fn is_done(&self) -> bool {
        self.next.is_none()
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once the paginator reports the last page. After
    /// an error the stream is finished and yields `Ok(None)` thereafter.
    pub async fn next_page(&mut self) -> Result<Option<Vec<S::Record>>> {
        let Some(request) = self.next.take() else {
            return Ok(None);
        };

        self.check_guards()?;

        if self.state.page > 0 {
            if let Some(delay) = self.limits.page_delay {
                pause(delay, self.cancel.as_ref()).await?;
            }
        }

        debug!(page = self.state.page + 1, request = ?request, "Fetching page");
        let fetch = self.source.fetch_page(&request);
        let page = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => return Err(Error::Cancelled),
                    page = fetch => page?,
                }
            }
            None => fetch.await?,
        };

        self.state.next_page();
        let record_count = page.records.len();
        debug!("Page {}: fetched {} records", self.state.page, record_count);

        match self.paginator.process_page(
            record_count,
            page.next_cursor.as_deref(),
            &mut self.state,
        ) {
            NextPage::Continue(next) => self.next = Some(next),
            NextPage::Done => self.state.mark_done(),
        }

        Ok(Some(page.records))
    }

    /// Fetch every remaining page and concatenate the records.
    ///
    /// On failure the records from pages that completed are returned
    /// alongside the error; the failed page contributes nothing.
    pub async fn drain(mut self) -> Retrieval<S::Record> {
        let mut records = Vec::new();
        loop {
            match self.next_page().await {
                Ok(Some(page)) => records.extend(page),
                Ok(None) => break,
                Err(error) => {
                    warn!(
                        pages = self.state.page,
                        records = records.len(),
                        "Retrieval stopped early: {error}"
                    );
                    return Err(Interrupted { records, error });
                }
            }
        }

        let elapsed_ms = self.started.map_or(0, |started| started.elapsed().as_millis());
        info!(
            pages = self.state.page,
            records = records.len(),
            elapsed_ms = elapsed_ms as u64,
            "Retrieved {} records in {} pages",
            records.len(),
            self.state.page
        );
        Ok(records)
    }

    /// Expose the walk as a stream of pages
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<S::Record>>> {
        futures::stream::unfold(self, |mut pages| async move {
            match pages.next_page().await {
                Ok(Some(page)) => Some((Ok(page), pages)),
                Ok(None) => None,
                Err(error) => Some((Err(error), pages)),
            }
        })
    }

    fn check_guards(&mut self) -> Result<()> {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Err(Error::Cancelled);
        }

        let started = *self.started.get_or_insert_with(Instant::now);

        if let Some(max_pages) = self.limits.max_pages {
            if self.state.page >= max_pages {
                return Err(Error::PageLimitExceeded { max_pages });
            }
        }

        if let Some(max_duration) = self.limits.max_duration {
            let elapsed = started.elapsed();
            if elapsed >= max_duration {
                return Err(Error::DeadlineExceeded {
                    elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                });
            }
        }

        Ok(())
    }
}

/// Sleep for `delay`, waking early on cancellation
async fn pause(delay: Duration, cancel: Option<&CancellationToken>) -> Result<()> {
    match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                () = tokio::time::sleep(delay) => Ok(()),
            }
        }
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}
