//! Paginator implementations
//!
//! Each paginator wraps a core [`Paginator`] snapshot and differs only in
//! where the page items come from.

use super::types::{
    first_index_for, normalize_page, normalize_page_size, window, Paginate, Paginator,
};
use crate::config::PageRequest;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Array Paginator
// ============================================================================

/// Paginator over a fully materialized sequence.
///
/// The current page is sliced eagerly from the backing sequence, which is
/// shared read-only so advancing never copies more than one page.
///
/// ```
/// use pagekit::pagination::{ArrayPaginator, Paginate};
///
/// let all: Vec<u32> = (0..100).collect();
/// let paginator = ArrayPaginator::new(all, 2, 10);
/// assert_eq!(paginator.items(), &[10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
/// assert_eq!(paginator.last_page(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayPaginator<T> {
    inner: Paginator<T>,
    /// `None` once restored from serialized form
    all: Option<Arc<[T]>>,
}

impl<T: Clone> ArrayPaginator<T> {
    /// Create a paginator positioned at `page`
    pub fn new(all: impl Into<Arc<[T]>>, page: i64, page_size: i64) -> Self {
        let all = all.into();
        let inner = slice_page(&all, normalize_page(page), normalize_page_size(page_size));
        Self {
            inner,
            all: Some(all),
        }
    }

    /// Create a paginator from page request parameters
    pub fn from_request(all: impl Into<Arc<[T]>>, request: &PageRequest) -> Self {
        Self::new(all, request.page, request.page_size)
    }

    /// Advance to the next page.
    ///
    /// Returns `false` and leaves the paginator untouched when already at the
    /// last page, or when there is no backing sequence to slice from.
    pub fn next_page(&mut self) -> bool {
        let Some(all) = &self.all else {
            return false;
        };
        if self.inner.page >= self.inner.last_page {
            return false;
        }

        let page = self.inner.page + 1;
        debug!(page, page_size = self.inner.page_size, "advancing array paginator");
        self.inner = slice_page(all, page, self.inner.page_size);
        true
    }

    /// Iterate over every page of the backing sequence, starting at page 1.
    ///
    /// Independent of the current position.
    pub fn pages(&self) -> Pages<'_, T> {
        Pages {
            all: self.all(),
            page: 1,
            page_size: self.inner.page_size,
            last_page: if self.all.is_some() {
                self.inner.last_page
            } else {
                0
            },
        }
    }
}

impl<T> ArrayPaginator<T> {
    /// The full backing sequence; empty after deserialization
    pub fn all(&self) -> &[T] {
        self.all.as_deref().unwrap_or(&[])
    }

    /// The current page as a standalone snapshot
    pub fn snapshot(&self) -> &Paginator<T> {
        &self.inner
    }
}

impl<T: DeserializeOwned> ArrayPaginator<T> {
    /// Restore the page-local state from JSON.
    ///
    /// The backing sequence is not part of the serialized form, so the
    /// restored paginator has an empty [`ArrayPaginator::all`] and cannot
    /// advance.
    pub fn from_json(json: &str) -> Result<Self> {
        Paginator::<T>::from_json(json).map(Self::from)
    }
}

impl<T> From<Paginator<T>> for ArrayPaginator<T> {
    fn from(inner: Paginator<T>) -> Self {
        Self { inner, all: None }
    }
}

fn slice_page<T: Clone>(all: &[T], page: u64, page_size: u64) -> Paginator<T> {
    let total = all.len() as u64;
    let items = all[window(total, page, page_size)].to_vec();
    Paginator::from_normalized(items, total, page, page_size)
}

impl<T> Paginate<T> for ArrayPaginator<T> {
    fn items(&self) -> &[T] {
        self.inner.items()
    }

    fn total(&self) -> u64 {
        self.inner.total()
    }

    fn first_item_index(&self) -> i64 {
        self.inner.first_item_index()
    }

    fn last_item_index(&self) -> i64 {
        self.inner.last_item_index()
    }

    fn current_page(&self) -> u64 {
        self.inner.current_page()
    }

    fn page_size(&self) -> u64 {
        self.inner.page_size()
    }

    fn last_page(&self) -> u64 {
        self.inner.last_page()
    }
}

impl<T: Serialize> Serialize for ArrayPaginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayPaginator<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Paginator::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Iterator over page snapshots of an [`ArrayPaginator`]
#[derive(Debug, Clone)]
pub struct Pages<'a, T> {
    all: &'a [T],
    page: u64,
    page_size: u64,
    last_page: u64,
}

impl<T: Clone> Iterator for Pages<'_, T> {
    type Item = Paginator<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page > self.last_page {
            return None;
        }
        let page = slice_page(self.all, self.page, self.page_size);
        self.page += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_page + 1).saturating_sub(self.page) as usize;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Pages<'_, T> {}

// ============================================================================
// Lazy Paginator
// ============================================================================

/// Loader invoked with `(page, page_size)`, returning the page items and the
/// total item count
pub type Loader<T> = Arc<dyn Fn(u64, u64) -> (Vec<T>, u64) + Send + Sync>;

/// Paginator that defers loading until the page is first read.
///
/// The loader runs at most once per instance, even when several threads
/// race on the first read; every reader waits for and observes the same
/// loaded page. Page number and page size are known up front and never
/// trigger a load.
pub struct LazyPaginator<T> {
    loader: Loader<T>,
    page: u64,
    page_size: u64,
    loaded: OnceCell<Paginator<T>>,
}

impl<T> LazyPaginator<T> {
    /// Create a lazy paginator. The loader is not invoked here.
    pub fn new<F>(loader: F, page: i64, page_size: i64) -> Self
    where
        F: Fn(u64, u64) -> (Vec<T>, u64) + Send + Sync + 'static,
    {
        Self::with_loader(Arc::new(loader), page, page_size)
    }

    /// Create a lazy paginator sharing an existing loader
    pub fn with_loader(loader: Loader<T>, page: i64, page_size: i64) -> Self {
        Self::unloaded(loader, normalize_page(page), normalize_page_size(page_size))
    }

    /// Create a lazy paginator from page request parameters
    pub fn from_request<F>(loader: F, request: &PageRequest) -> Self
    where
        F: Fn(u64, u64) -> (Vec<T>, u64) + Send + Sync + 'static,
    {
        Self::new(loader, request.page, request.page_size)
    }

    fn unloaded(loader: Loader<T>, page: u64, page_size: u64) -> Self {
        Self {
            loader,
            page,
            page_size,
            loaded: OnceCell::new(),
        }
    }

    /// Whether the loader has already run for this page
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// The loaded page, invoking the loader on first use
    pub fn snapshot(&self) -> &Paginator<T> {
        self.loaded.get_or_init(|| {
            debug!(
                page = self.page,
                page_size = self.page_size,
                "loading lazy paginator page"
            );
            let (items, total) = (self.loader)(self.page, self.page_size);
            Paginator::from_normalized(items, total, self.page, self.page_size)
        })
    }

    /// Advance to the next page.
    ///
    /// Loads the current page if needed, since the last page is unknown until
    /// then. Returns `false` without changing state at or past the last page;
    /// otherwise swaps in a fresh, unloaded paginator for the following page.
    pub fn next_page(&mut self) -> bool {
        if self.page >= self.snapshot().last_page {
            return false;
        }

        let page = self.page + 1;
        debug!(page, page_size = self.page_size, "advancing lazy paginator");
        *self = Self::unloaded(Arc::clone(&self.loader), page, self.page_size);
        true
    }

    /// Always fails: the loader cannot be reconstructed from serialized data
    pub fn from_json(_json: &str) -> Result<Self> {
        Err(Error::unsupported(LAZY_DECODE_UNSUPPORTED))
    }
}

const LAZY_DECODE_UNSUPPORTED: &str = "lazy paginator cannot be deserialized";

impl<T> Paginate<T> for LazyPaginator<T> {
    fn items(&self) -> &[T] {
        self.snapshot().items()
    }

    fn total(&self) -> u64 {
        self.snapshot().total()
    }

    fn first_item_index(&self) -> i64 {
        first_index_for(self.page, self.page_size)
    }

    fn last_item_index(&self) -> i64 {
        self.snapshot().last_item_index()
    }

    fn current_page(&self) -> u64 {
        self.page
    }

    fn page_size(&self) -> u64 {
        self.page_size
    }

    fn last_page(&self) -> u64 {
        self.snapshot().last_page()
    }
}

impl<T: Clone> Clone for LazyPaginator<T> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            page: self.page,
            page_size: self.page_size,
            loaded: self.loaded.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyPaginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyPaginator")
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("loaded", &self.loaded.get())
            .finish_non_exhaustive()
    }
}

impl<T: Serialize> Serialize for LazyPaginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for LazyPaginator<T> {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> std::result::Result<Self, D::Error> {
        Err(de::Error::custom(LAZY_DECODE_UNSUPPORTED))
    }
}
