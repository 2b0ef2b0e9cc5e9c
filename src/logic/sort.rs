use crate::state::{Product, SortKey};

/// What: Order filtered products by `key`, in place.
///
/// Inputs:
/// - `items`: Filtered products in catalog order
/// - `key`: Active sort mode
///
/// Output:
/// - `items` reordered; equal keys keep their incoming relative order.
///
/// Details:
/// - Relies on `sort_by` being stable.
/// - Prices compare with `total_cmp`, so NaN never panics and sorts last when ascending.
pub fn sort_products(items: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Popular => items.sort_by(|a, b| b.rating.count.cmp(&a.rating.count)),
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}
