use crate::state::{FilterState, Product};

/// What: Whether `p` passes the search predicate.
///
/// Inputs:
/// - `p`: Candidate product
/// - `needle_lower`: Search text already lowercased; empty matches everything
///
/// Output:
/// - `true` when the lowercased title contains `needle_lower`.
fn matches_search(p: &Product, needle_lower: &str) -> bool {
    needle_lower.is_empty() || p.title.to_lowercase().contains(needle_lower)
}

/// Exact category match; `None` keeps everything.
fn matches_category(p: &Product, category: Option<&str>) -> bool {
    category.is_none_or(|c| p.category == c)
}

/// Whole-star threshold; `0` keeps everything.
fn matches_rating(p: &Product, min_rating: u8) -> bool {
    min_rating == 0 || p.rating.rounded_stars() >= min_rating
}

/// What: Apply the search, category, price and rating stages in order.
///
/// Inputs:
/// - `products`: Raw catalog in fetch order
/// - `filter`: Active filter state (sort and page are ignored here)
///
/// Output:
/// - Borrowed matches, preserving the relative order of `products`.
///
/// Details:
/// - Every returned product satisfies all active predicates at once.
/// - The search text is not trimmed; a lone space is a real needle.
#[must_use]
pub fn apply_filters<'a>(products: &'a [Product], filter: &FilterState) -> Vec<&'a Product> {
    let needle = filter.search.to_lowercase();
    let category = filter.category.as_deref();
    products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| matches_category(p, category))
        .filter(|p| filter.price.contains(p.price))
        .filter(|p| matches_rating(p, filter.min_rating))
        .collect()
}
