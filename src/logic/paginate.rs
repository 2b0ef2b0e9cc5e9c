/// Default number of products per catalog page.
pub const PRODUCTS_PER_PAGE: usize = 9;

/// Number of reviews per review page.
pub const REVIEWS_PER_PAGE: usize = 5;

/// What: Number of pages needed for `total` items.
///
/// Inputs:
/// - `total`: Item count after filtering
/// - `page_size`: Items per page; `0` is treated as `1`
///
/// Output:
/// - `ceil(total / page_size)`; `0` when there are no items.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    total.div_ceil(size)
}

/// What: Borrow the 1-based `page` of `items`.
///
/// Inputs:
/// - `items`: Ordered items
/// - `page`: 1-based page number; `0` is read as the first page
/// - `page_size`: Items per page; `0` is treated as `1`
///
/// Output:
/// - The page slice; empty when `page` lies past the last page.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}
