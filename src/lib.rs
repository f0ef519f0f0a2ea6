//! # pagekit
//!
//! Pagination over in-memory sequences and lazily loaded pages.
//!
//! ## Features
//!
//! - **Array Paginator**: Slice pages out of a fully materialized sequence
//! - **Lazy Paginator**: Defer loading a page until it is first read, then cache it
//! - **Shared Contract**: Every paginator implements [`Paginate`]
//! - **Serialization**: Pages encode to and decode from a stable JSON shape
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{ArrayPaginator, LazyPaginator, Paginate};
//!
//! let letters: Vec<char> = ('a'..='j').collect();
//! let mut paginator = ArrayPaginator::new(letters, 2, 3);
//! assert_eq!(paginator.items(), &['d', 'e', 'f']);
//! assert_eq!(paginator.last_page(), 4);
//! assert!(paginator.next_page());
//! assert_eq!(paginator.items(), &['g', 'h', 'i']);
//!
//! let lazy = LazyPaginator::new(
//!     |page, page_size| {
//!         let start = (page - 1) * page_size;
//!         ((start..start + page_size).collect::<Vec<u64>>(), 95)
//!     },
//!     1,
//!     10,
//! );
//! assert!(!lazy.is_loaded());
//! assert_eq!(lazy.last_page(), 10);
//! assert!(lazy.is_loaded());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Paginate contract                      │
//! │  items  total  current_page  page_size  last_page  to_map │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//!        ┌──────────────────────┼──────────────────────┐
//!   Paginator             ArrayPaginator          LazyPaginator
//!   (page snapshot)       (slices a sequence)     (loader, run once)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paginators and the shared pagination contract
pub mod pagination;

/// Page request configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PageRequest;
pub use error::{Error, Result};
pub use pagination::{ArrayPaginator, LazyPaginator, Paginate, Paginator, DEFAULT_PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
