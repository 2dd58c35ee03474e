//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by both strategies.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Parameters for fetching one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Cursor-follow request; `None` on the first page
    Cursor(Option<String>),
    /// Offset-increment request
    Offset {
        /// Number of records to skip
        offset: u32,
        /// Page size
        limit: u32,
    },
}

impl PageRequest {
    /// The cursor carried by this request, if any and non-empty
    pub fn cursor(&self) -> Option<&str> {
        match self {
            Self::Cursor(Some(cursor)) if !cursor.is_empty() => Some(cursor),
            _ => None,
        }
    }
}

/// One decoded page: records in server order plus the continuation token
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records in the order the server returned them
    pub records: Vec<T>,
    /// Continuation cursor; `None` or empty means no further pages
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// A page without a continuation token
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            next_cursor: None,
        }
    }

    /// A page carrying a continuation cursor
    pub fn with_cursor(records: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with this request
    Continue(PageRequest),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub page: u32,
    /// Current offset (for offset-based pagination)
    pub offset: u32,
    /// Current cursor value
    pub cursor: Option<String>,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment the page counter
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add offset
    pub fn add_offset(&mut self, amount: u32) {
        self.offset += amount;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Request for the first page
    fn first_request(&self, state: &PaginationState) -> PageRequest;

    /// Process a fetched page and determine if there's a next one
    fn process_page(
        &self,
        records_count: usize,
        next_cursor: Option<&str>,
        state: &mut PaginationState,
    ) -> NextPage;
}

/// Fetches one page: build the request, call the transport, decode the envelope
#[async_trait]
pub trait PageSource: Send {
    /// Record type produced by this source
    type Record: Send;

    /// Fetch the page described by `request`
    async fn fetch_page(&mut self, request: &PageRequest) -> Result<Page<Self::Record>>;
}

/// Optional guards on an otherwise unbounded retrieval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationLimits {
    /// Maximum number of pages to fetch
    pub max_pages: Option<u32>,
    /// Maximum wall-clock time for the whole retrieval
    pub max_duration: Option<Duration>,
    /// Pause between consecutive page requests
    pub page_delay: Option<Duration>,
}

impl PaginationLimits {
    /// No guards and no delay
    pub fn none() -> Self {
        Self::default()
    }

    /// Cap the number of pages
    #[must_use]
    pub fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Cap the total retrieval time
    #[must_use]
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    /// Pause between page requests
    #[must_use]
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = Some(delay);
        self
    }
}

/// Outcome of draining every page: all records, or the partial set and the cause
pub type Retrieval<T> = std::result::Result<Vec<T>, Interrupted<T>>;

/// A retrieval that stopped early, with everything collected before it did
#[derive(Debug)]
pub struct Interrupted<T> {
    /// Records accumulated from pages that completed
    pub records: Vec<T>,
    /// Why the retrieval stopped
    pub error: Error,
}

impl<T> Interrupted<T> {
    /// Wrap an error that happened before any record was collected
    pub fn empty(error: Error) -> Self {
        Self {
            records: Vec::new(),
            error,
        }
    }

    /// Split into the partial records and the error
    pub fn into_parts(self) -> (Vec<T>, Error) {
        (self.records, self.error)
    }

    /// Whether the interruption came from cancellation
    pub fn is_cancelled(&self) -> bool {
        self.error.is_cancelled()
    }
}

impl<T> fmt::Display for Interrupted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "retrieval interrupted after {} records: {}",
            self.records.len(),
            self.error
        )
    }
}

impl<T: fmt::Debug> std::error::Error for Interrupted<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<Interrupted<T>> for Error {
    fn from(interrupted: Interrupted<T>) -> Self {
        interrupted.error
    }
}
