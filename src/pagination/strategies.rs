//! Pagination strategy implementations
//!
//! Each strategy handles one of the server's pagination patterns.

use super::types::{NextPage, PageRequest, PaginationState, Paginator};

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-follow pagination
///
/// Sends the cursor returned by the previous page until the server
/// reports no further cursor. The first request carries no cursor.
#[derive(Debug, Clone, Default)]
pub struct CursorPaginator {
    /// Cursor to resume from, if any
    pub start_cursor: Option<String>,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a cursor obtained earlier
    pub fn resume_from(cursor: impl Into<String>) -> Self {
        let cursor = cursor.into();
        Self {
            start_cursor: (!cursor.is_empty()).then_some(cursor),
        }
    }
}

impl Paginator for CursorPaginator {
    fn first_request(&self, state: &PaginationState) -> PageRequest {
        PageRequest::Cursor(state.cursor.clone().or_else(|| self.start_cursor.clone()))
    }

    fn process_page(
        &self,
        records_count: usize,
        next_cursor: Option<&str>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        match next_cursor {
            Some(cursor) if !cursor.is_empty() => {
                state.set_cursor(cursor.to_string());
                NextPage::Continue(PageRequest::Cursor(Some(cursor.to_string())))
            }
            _ => {
                state.mark_done();
                NextPage::Done
            }
        }
    }
}

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset-increment pagination
///
/// Requests `offset, limit` windows and stops on the first page holding
/// fewer than `limit` records. When the total is an exact multiple of
/// `limit` this costs one extra request that returns an empty page.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Number of records per page
    pub limit: u32,
    /// Offset of the first page
    pub start_offset: u32,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            start_offset: 0,
        }
    }

    /// Start from a non-zero offset
    #[must_use]
    pub fn starting_at(mut self, offset: u32) -> Self {
        self.start_offset = offset;
        self
    }
}

impl Paginator for OffsetPaginator {
    fn first_request(&self, state: &PaginationState) -> PageRequest {
        PageRequest::Offset {
            offset: self.start_offset + state.offset,
            limit: self.limit,
        }
    }

    fn process_page(
        &self,
        records_count: usize,
        _next_cursor: Option<&str>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        // A zero limit cannot advance the offset, so one page is all there is.
        if self.limit == 0 || records_count == 0 || records_count < self.limit as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.limit);
        NextPage::Continue(PageRequest::Offset {
            offset: self.start_offset + state.offset,
            limit: self.limit,
        })
    }
}

// ============================================================================
// No Pagination
// ============================================================================

/// Single request, no pagination
#[derive(Debug, Clone)]
pub struct NoPaginator {
    request: PageRequest,
}

impl NoPaginator {
    /// Fetch exactly one page described by `request`
    pub fn new(request: PageRequest) -> Self {
        Self { request }
    }
}

impl Paginator for NoPaginator {
    fn first_request(&self, _state: &PaginationState) -> PageRequest {
        self.request.clone()
    }

    fn process_page(
        &self,
        records_count: usize,
        _next_cursor: Option<&str>,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);
        state.mark_done();
        NextPage::Done
    }
}
