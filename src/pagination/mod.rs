//! Pagination module
//!
//! Supports: Cursor-follow, Offset-increment, single page
//!
//! # Overview
//!
//! A [`Paginator`] decides what to request next from the page just
//! received; a [`PageSource`] performs the request. [`PageStream`] runs
//! the two together until the paginator reports the last page, a limit
//! trips, or the caller cancels.

mod strategies;
mod stream;
mod types;

pub use strategies::{CursorPaginator, NoPaginator, OffsetPaginator};
pub use stream::PageStream;
pub use types::{
    Interrupted, NextPage, Page, PageRequest, PageSource, PaginationLimits, PaginationState,
    Paginator, Retrieval,
};
