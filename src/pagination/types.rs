//! Pagination types and traits
//!
//! Defines the shared paginator contract and the core `Paginator` snapshot
//! that every concrete paginator delegates to.

use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Range;
use tracing::trace;

/// Page size used when a non-positive page size is requested
pub const DEFAULT_PAGE_SIZE: u64 = 10;

// ============================================================================
// Normalization
// ============================================================================

/// Clamp a requested page number to the first page (pages are 1-based)
pub fn normalize_page(page: i64) -> u64 {
    if page < 1 {
        trace!(page, "page out of range, using first page");
        1
    } else {
        page as u64
    }
}

/// Replace a non-positive page size with [`DEFAULT_PAGE_SIZE`]
pub fn normalize_page_size(page_size: i64) -> u64 {
    if page_size <= 0 {
        trace!(page_size, "page size out of range, using default");
        DEFAULT_PAGE_SIZE
    } else {
        page_size as u64
    }
}

/// Number of the last page holding at least one item.
///
/// `ceil(total / page_size)`, so an empty dataset has no pages at all.
pub fn last_page_for(total: u64, page_size: u64) -> u64 {
    total.div_ceil(page_size.max(1))
}

/// Index range of `page` within a dataset of `total` items, clamped to
/// `[0, total]`. Pages past the end yield an empty range.
pub fn window(total: u64, page: u64, page_size: u64) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= total {
        return total as usize..total as usize;
    }
    let end = start.saturating_add(page_size).min(total);
    start as usize..end as usize
}

/// 0-based index of the first item of `page`, saturating at `i64::MAX`
pub(crate) fn first_index_for(page: u64, page_size: u64) -> i64 {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// 0-based index of the last of `count` items starting at `first`.
///
/// `first - 1` when `count` is zero; saturates instead of overflowing.
pub(crate) fn last_index_for(first: i64, count: usize) -> i64 {
    match count.checked_sub(1) {
        Some(rest) => first.saturating_add(i64::try_from(rest).unwrap_or(i64::MAX)),
        None => first.saturating_sub(1),
    }
}

// ============================================================================
// Paginate Contract
// ============================================================================

/// Capability set shared by every paginator.
///
/// Code that only needs to read a page should depend on this trait rather
/// than on a concrete paginator type.
pub trait Paginate<T> {
    /// Items of the current page
    fn items(&self) -> &[T];

    /// Total number of items across all pages
    fn total(&self) -> u64;

    /// 0-based absolute index of the first item of the current page
    fn first_item_index(&self) -> i64;

    /// 0-based absolute index of the last item of the current page.
    ///
    /// Only meaningful when the page has items: for an empty page this is
    /// `first_item_index() - 1` and may be negative.
    fn last_item_index(&self) -> i64;

    /// Current page number (1-based)
    fn current_page(&self) -> u64;

    /// Maximum number of items per page
    fn page_size(&self) -> u64;

    /// Last page number, 0 when there are no items
    fn last_page(&self) -> u64;

    /// Whether a page exists after the current one
    fn has_more(&self) -> bool {
        self.current_page() < self.last_page()
    }

    /// Page data and metadata as a JSON object
    fn to_map(&self) -> Result<JsonObject>
    where
        T: Serialize,
    {
        match serde_json::to_value(PageView::of(self))? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Other(format!(
                "paginator serialized to a non-object value: {other}"
            ))),
        }
    }

    /// Compact JSON encoding of [`Paginate::to_map`]
    fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(&PageView::of(self))?)
    }

    /// Pretty-printed JSON encoding of [`Paginate::to_map`]
    fn to_json_pretty(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string_pretty(&PageView::of(self))?)
    }
}

/// Borrowed wire representation of a page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageView<'a, T> {
    items: &'a [T],
    total: u64,
    page: u64,
    page_size: u64,
    last_page: u64,
    from: Option<i64>,
    to: Option<i64>,
}

impl<'a, T> PageView<'a, T> {
    pub(crate) fn of<P: Paginate<T> + ?Sized>(paginator: &'a P) -> Self {
        let items = paginator.items();
        let (from, to) = if items.is_empty() {
            (None, None)
        } else {
            (
                Some(paginator.first_item_index()),
                Some(paginator.last_item_index()),
            )
        };
        Self {
            items,
            total: paginator.total(),
            page: paginator.current_page(),
            page_size: paginator.page_size(),
            last_page: paginator.last_page(),
            from,
            to,
        }
    }
}

/// Owned wire representation used when decoding.
///
/// `lastPage`, `from` and `to` are derived values and are ignored on input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRepr<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    page: i64,
    #[serde(default)]
    page_size: i64,
}

// ============================================================================
// Core Paginator
// ============================================================================

/// Immutable snapshot of one page: its items plus the totals needed to
/// describe where it sits in the full dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    pub(crate) items: Vec<T>,
    pub(crate) total: u64,
    pub(crate) page: u64,
    pub(crate) page_size: u64,
    pub(crate) last_page: u64,
}

impl<T> Paginator<T> {
    /// Create a paginator over an already sliced page.
    ///
    /// Pages below 1 become 1 and non-positive page sizes become
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(items: Vec<T>, total: u64, page: i64, page_size: i64) -> Self {
        Self::from_normalized(
            items,
            total,
            normalize_page(page),
            normalize_page_size(page_size),
        )
    }

    pub(crate) fn from_normalized(items: Vec<T>, total: u64, page: u64, page_size: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Self {
            items,
            total,
            page,
            page_size,
            last_page: last_page_for(total, page_size),
        }
    }

    /// Consume the paginator, returning the page items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::from_normalized(Vec::new(), 0, 1, DEFAULT_PAGE_SIZE)
    }
}

impl<T: DeserializeOwned> Paginator<T> {
    /// Decode a paginator from its JSON form, re-deriving `lastPage`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::decode(e.to_string()))
    }

    /// Decode a paginator from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
    }
}

impl<T> Paginate<T> for Paginator<T> {
    fn items(&self) -> &[T] {
        &self.items
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn first_item_index(&self) -> i64 {
        first_index_for(self.page, self.page_size)
    }

    fn last_item_index(&self) -> i64 {
        last_index_for(self.first_item_index(), self.items.len())
    }

    fn current_page(&self) -> u64 {
        self.page
    }

    fn page_size(&self) -> u64 {
        self.page_size
    }

    fn last_page(&self) -> u64 {
        self.last_page
    }
}

impl<T: Serialize> Serialize for Paginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        PageView::of(self).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Paginator<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = PageRepr::<T>::deserialize(deserializer)?;
        Ok(Self::new(repr.items, repr.total, repr.page, repr.page_size))
    }
}
