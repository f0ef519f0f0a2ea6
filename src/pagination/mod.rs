//! Pagination module
//!
//! Supports: pre-sliced pages, array-backed pages, lazily loaded pages
//!
//! # Overview
//!
//! Every paginator exposes the same [`Paginate`] contract: the items of the
//! current page plus total, page, page size and last page metadata. Page
//! numbers are 1-based. Out-of-range inputs are normalized rather than
//! rejected: pages below 1 become 1 and non-positive page sizes become
//! [`DEFAULT_PAGE_SIZE`].
//!
//! Advancing with `next_page()` swaps in a freshly computed snapshot instead
//! of mutating the current one.

mod strategies;
mod types;

pub use strategies::{ArrayPaginator, LazyPaginator, Loader, Pages};
pub use types::{
    last_page_for, normalize_page, normalize_page_size, window, Paginate, Paginator,
    DEFAULT_PAGE_SIZE,
};
