//! Catalog view-model: the raw product list plus the derived page view.
//!
//! The derived view is a pure function of `(products, filter, page_size)`.
//! Nothing here performs I/O; the raw list arrives from a loader and is held
//! unchanged until the next load.

use std::collections::HashSet;

use crate::logic::filter::apply_filters;
use crate::logic::paginate::{page_count, page_slice};
use crate::logic::sort::sort_products;
use crate::state::{ALL_CATEGORIES, FilterState, Product};

/// One derived page of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Products on the requested page, in sorted order.
    pub items: Vec<Product>,
    /// Number of products that passed every filter.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`.
    pub page_count: usize,
    /// The 1-based page that was requested.
    pub page: usize,
}

impl CatalogPage {
    /// Whether the requested page lies past the last page.
    #[must_use]
    pub const fn is_past_end(&self) -> bool {
        self.page > self.page_count
    }
}

/// What: Derive the filtered, sorted and paginated view.
///
/// Inputs:
/// - `products`: Raw catalog in fetch order
/// - `filter`: Search, category, price, rating, sort and page parameters
/// - `page_size`: Products per page
///
/// Output:
/// - [`CatalogPage`] with the page items and page accounting.
///
/// Details:
/// - Stages run in order: search, category, price, rating, stable sort, paginate.
/// - A page past the end yields no items rather than an error.
#[must_use]
pub fn derive_page(products: &[Product], filter: &FilterState, page_size: usize) -> CatalogPage {
    let mut matched = apply_filters(products, filter);
    sort_products(&mut matched, filter.sort);
    let page = filter.page_or_first();
    let items = page_slice(&matched, page, page_size)
        .iter()
        .map(|p| (*p).clone())
        .collect();
    CatalogPage {
        items,
        filtered_count: matched.len(),
        page_count: page_count(matched.len(), page_size),
        page,
    }
}

/// What: Category selector entries.
///
/// Inputs:
/// - `products`: Raw catalog
///
/// Output:
/// - `"All"` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            products
                .iter()
                .filter(|p| seen.insert(p.category.as_str()))
                .map(|p| p.category.clone()),
        )
        .collect()
}

/// Load status of the raw catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Fetch issued, nothing received yet.
    #[default]
    Loading,
    /// Catalog received (possibly empty).
    Loaded(Vec<Product>),
    /// Fetch failed; holds the page-level message.
    Failed(String),
}

/// Holder of the raw catalog and its load status.
///
/// Callers distinguish "no products" (`Loaded(vec![])`) from "couldn't load
/// products" (`Failed(..)`).
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    /// Current load status and, once loaded, the raw products.
    state: LoadState,
    /// Products per page for [`CatalogView::page`].
    page_size: usize,
}

impl CatalogView {
    /// What: Create a view in the `Loading` state.
    ///
    /// Inputs:
    /// - `page_size`: Products per page (`0` is clamped to `1`)
    ///
    /// Output: Empty view waiting for [`CatalogView::finish_load`].
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            state: LoadState::Loading,
            page_size: page_size.max(1),
        }
    }

    /// What: Record the outcome of the one-time catalog fetch.
    ///
    /// Inputs:
    /// - `result`: Products on success, user-facing message on failure
    ///
    /// Output: Moves to `Loaded` or `Failed`.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, String>) {
        self.state = match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "[Catalog] Loaded products");
                LoadState::Loaded(products)
            }
            Err(msg) => {
                tracing::warn!(error = %msg, "[Catalog] Load failed");
                LoadState::Failed(msg)
            }
        };
    }

    /// Current load status.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Products per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Raw products; empty unless loaded.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match &self.state {
            LoadState::Loaded(p) => p,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// Whether the catalog is still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Load failure message, if the fetch failed.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }

    /// What: Derive the page view for `filter`.
    ///
    /// Inputs:
    /// - `filter`: Active filter state
    ///
    /// Output:
    /// - `Some(page)` once loaded; `None` while loading or after a failure.
    #[must_use]
    pub fn page(&self, filter: &FilterState) -> Option<CatalogPage> {
        match &self.state {
            LoadState::Loaded(products) => Some(derive_page(products, filter, self.page_size)),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    /// Category selector entries; just `"All"` until loaded.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(self.products())
    }

    /// Look up a loaded product by id.
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PriceRange, Rating, SortKey};

    fn item(id: u64, category: &str, price: f64, count: u32) -> Product {
        Product {
            id,
            title: format!("Item {id}"),
            price,
            description: String::new(),
            category: category.to_string(),
            image: format!("https://img/{id}.jpg"),
            rating: Rating { rate: 4.0, count },
        }
    }

    /// Ten products; three in category "A" priced 15, 5, 10.
    fn ten_products() -> Vec<Product> {
        vec![
            item(1, "B", 20.0, 5),
            item(2, "A", 15.0, 30),
            item(3, "C", 7.0, 1),
            item(4, "A", 5.0, 12),
            item(5, "B", 99.0, 40),
            item(6, "C", 1.0, 2),
            item(7, "A", 10.0, 3),
            item(8, "B", 50.0, 9),
            item(9, "C", 42.0, 8),
            item(10, "B", 3.0, 7),
        ]
    }

    #[test]
    /// What: Category "A" sorted price-ascending
    ///
    /// - Input: Ten products, three in "A" priced {5,10,15}; price-asc
    /// - Output: The three "A" products ordered 5, 10, 15
    fn category_a_price_ascending() {
        let f = FilterState {
            category: Some("A".into()),
            sort: SortKey::PriceAsc,
            ..FilterState::default()
        };
        let page = derive_page(&ten_products(), &f, 9);
        let prices: Vec<f64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 10.0, 15.0]);
        assert_eq!(page.filtered_count, 3);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    /// What: Pagination accounting across the default popularity sort
    ///
    /// - Input: Ten products, page size 4, pages 1..=4
    /// - Output: 3 pages; page 3 holds 2 items; page 4 is empty, not an error
    fn paging_and_past_end() {
        let products = ten_products();
        let mut f = FilterState::default();
        let p1 = derive_page(&products, &f, 4);
        assert_eq!(p1.page_count, 3);
        assert_eq!(
            p1.items.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![5, 2, 4, 8]
        );
        f.page = 3;
        assert_eq!(derive_page(&products, &f, 4).items.len(), 2);
        f.page = 4;
        let past = derive_page(&products, &f, 4);
        assert!(past.items.is_empty());
        assert!(past.is_past_end());
        assert_eq!(past.filtered_count, 10);
    }

    #[test]
    /// What: Derivation is idempotent
    ///
    /// - Input: Same products and filter twice
    /// - Output: Identical pages
    fn derivation_is_idempotent() {
        let products = ten_products();
        let f = FilterState {
            price: PriceRange {
                min: 3.0,
                max: 50.0,
            },
            sort: SortKey::PriceDesc,
            ..FilterState::default()
        };
        assert_eq!(derive_page(&products, &f, 3), derive_page(&products, &f, 3));
    }

    #[test]
    /// What: Category list is "All" plus distinct categories in first-seen order
    ///
    /// - Input: Ten products cycling B, A, C
    /// - Output: ["All", "B", "A", "C"]
    fn categories_first_seen_order() {
        assert_eq!(categories(&ten_products()), vec!["All", "B", "A", "C"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    /// What: Load failure is distinct from an empty catalog
    ///
    /// - Input: One view finishing with Err, another with Ok(empty)
    /// - Output: Failed view has no page and an error; empty view has an empty page
    fn failed_load_differs_from_empty() {
        let mut failed = CatalogView::new(9);
        assert!(failed.is_loading());
        assert!(failed.page(&FilterState::default()).is_none());
        failed.finish_load(Err("Failed to fetch products".into()));
        assert_eq!(failed.load_error(), Some("Failed to fetch products"));
        assert!(failed.page(&FilterState::default()).is_none());

        let mut empty = CatalogView::new(9);
        empty.finish_load(Ok(Vec::new()));
        assert_eq!(empty.load_error(), None);
        let page = empty.page(&FilterState::default());
        assert!(page.is_some_and(|p| p.items.is_empty() && p.page_count == 0));
    }

    #[test]
    /// What: Lookup by id after load
    ///
    /// - Input: Loaded ten products; ids 7 and 70
    /// - Output: Found and not found
    fn find_by_id() {
        let mut view = CatalogView::new(0);
        assert_eq!(view.page_size(), 1);
        view.finish_load(Ok(ten_products()));
        assert_eq!(view.find(7).map(|p| p.price), Some(10.0));
        assert!(view.find(70).is_none());
    }
}
