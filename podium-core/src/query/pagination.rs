//! Page slicing with out-of-range clamping.

use serde::Serialize;

/// Smallest page size the paginator accepts.
pub const MIN_PAGE_SIZE: usize = 1;

/// One page of a collection, plus the clamped page number so callers can
/// resynchronize their state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages for `count` items, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(MIN_PAGE_SIZE)).max(1)
}

/// Slice `items` into the requested 1-based page.
///
/// `page_size` is clamped to at least one and `page` into
/// `[1, total_pages]`; an empty collection still reports one (empty) page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(MIN_PAGE_SIZE);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        page_size,
        total_pages,
        total_items: items.len(),
    }
}
