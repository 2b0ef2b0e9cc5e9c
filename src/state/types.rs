//! Core value types used by storefront state.

use serde::{Deserialize, Serialize};

/// Aggregate customer rating attached to a product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in the `0.0..=5.0` range.
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings that make up `rate`.
    #[serde(default)]
    pub count: u32,
}

impl Rating {
    /// What: Round the average score half-up to the nearest whole star.
    ///
    /// Inputs: none
    ///
    /// Output: Whole-star value (`2.5` -> `3`, `2.49` -> `2`).
    #[must_use]
    pub fn rounded_stars(&self) -> u8 {
        let r = (self.rate + 0.5).floor();
        if r <= 0.0 {
            0
        } else if r >= f64::from(u8::MAX) {
            u8::MAX
        } else {
            // Bounded above, the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                r as u8
            }
        }
    }
}

/// A catalog entry as served by `GET /products`.
///
/// Products are immutable once fetched; the catalog owns them for the
/// duration of a visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Display title; the search filter matches against this.
    pub title: String,
    /// Price in the API's currency-agnostic unit.
    pub price: f64,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category name used for grouping and the category filter.
    pub category: String,
    /// Product image URI.
    #[serde(default)]
    pub image: String,
    /// Aggregate customer rating. Missing on freshly created products.
    #[serde(default)]
    pub rating: Rating,
}

/// Sorting mode for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Default: most rated first.
    #[default]
    Popular,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortKey {
    /// Return the string key used on the command line and in settings files.
    ///
    /// Inputs: none
    ///
    /// Output: Static config key string.
    #[must_use]
    pub const fn as_config_key(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Parse a sort key from its settings key.
    ///
    /// Inputs: `s` config string (case-insensitive, `_` and `-` interchangeable).
    ///
    /// Output: `Some(SortKey)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "popular" => Some(Self::Popular),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }

    /// Human label shown in the sort selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Popular => "Sort by: Popular",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    /// Next sort key in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Popular => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::Popular,
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lowest accepted price.
    pub min: f64,
    /// Highest accepted price.
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1000.0,
        }
    }
}

impl PriceRange {
    /// Whether `price` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// User-controlled parameters that select the derived product view.
///
/// Nothing here is persisted; a new visit starts from `FilterState::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Case-insensitive title substring; empty keeps everything.
    pub search: String,
    /// Selected category; `None` means "All".
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price: PriceRange,
    /// Minimum whole-star rating; `0` disables the filter.
    pub min_rating: u8,
    /// Ordering applied after filtering.
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            price: PriceRange::default(),
            min_rating: 0,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl FilterState {
    /// What: Select a category by its display name, treating "All" as no filter.
    ///
    /// Inputs:
    /// - `name`: Category label as shown in the selector
    ///
    /// Output:
    /// - Updates `category` and resets `page` to 1.
    pub fn select_category(&mut self, name: &str) {
        self.category = if name.is_empty() || name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(name.to_string())
        };
        self.page = 1;
    }

    /// Effective 1-based page; `0` is read as the first page.
    #[must_use]
    pub fn page_or_first(&self) -> usize {
        self.page.max(1)
    }
}

/// Label of the pseudo-category that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Request for a product detail fetch sent to the background worker.
#[derive(Clone, Debug)]
pub struct DetailRequest {
    /// Monotonic identifier used to drop stale responses.
    pub seq: u64,
    /// Product to load.
    pub product_id: u64,
}

/// Outcome of a prior [`DetailRequest`].
#[derive(Clone, Debug)]
pub struct DetailResponse {
    /// Echoed identifier from the originating request.
    pub seq: u64,
    /// Loaded product with the catalog snapshot fetched alongside it, or a
    /// user-facing error message.
    pub result: Result<(Product, Vec<Product>), String>,
}

#[cfg(test)]
mod tests {
    use super::{FilterState, Rating, SortKey};

    #[test]
    /// What: SortKey config key mapping roundtrip and normalisation
    ///
    /// - Input: Known keys, a case/underscore variant, informal names, unknown key
    /// - Output: Known keys map back; "PRICE_ASC" accepted; informal names and unknown rejected
    fn sortkey_config_roundtrip_and_normalisation() {
        for k in [SortKey::Popular, SortKey::PriceAsc, SortKey::PriceDesc] {
            assert_eq!(SortKey::from_config_key(k.as_config_key()), Some(k));
        }
        assert_eq!(SortKey::from_config_key("PRICE_ASC"), Some(SortKey::PriceAsc));
        for informal in ["cheapest", "price-low", "popularity", "rating-count", "price-high"] {
            assert_eq!(SortKey::from_config_key(informal), None, "{informal}");
        }
        assert_eq!(SortKey::from_config_key("newest"), None);
        assert_eq!(SortKey::Popular.next().next().next(), SortKey::Popular);
    }

    #[test]
    /// What: Half-up rounding of average ratings
    ///
    /// - Input: Rates on and around .5 boundaries
    /// - Output: Math.round-style whole stars
    fn rating_rounds_half_up() {
        let stars = |rate: f64| Rating { rate, count: 1 }.rounded_stars();
        assert_eq!(stars(0.0), 0);
        assert_eq!(stars(0.49), 0);
        assert_eq!(stars(2.5), 3);
        assert_eq!(stars(3.49), 3);
        assert_eq!(stars(3.5), 4);
        assert_eq!(stars(4.7), 5);
        assert_eq!(stars(5.0), 5);
    }

    #[test]
    /// What: Category selection treats "All" as cleared and resets the page
    ///
    /// - Input: Filter on page 3; select "jewelery" then "All"
    /// - Output: Category set then cleared; page back to 1 each time
    fn select_category_resets_page() {
        let mut f = FilterState {
            page: 3,
            ..FilterState::default()
        };
        f.select_category("jewelery");
        assert_eq!(f.category.as_deref(), Some("jewelery"));
        assert_eq!(f.page, 1);
        f.page = 2;
        f.select_category("all");
        assert_eq!(f.category, None);
        assert_eq!(f.page, 1);
    }
}
