//! Product-detail side panels: related items, "popular this week", and the
//! image gallery.
//!
//! The random picks take the RNG from the caller so a fixed seed gives
//! repeatable output.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::state::Product;

/// Maximum number of related products shown under a product.
pub const RELATED_LIMIT: usize = 5;
/// Maximum number of "popular this week" picks.
pub const POPULAR_LIMIT: usize = 5;
/// Number of extra gallery images borrowed from other products.
pub const GALLERY_EXTRA_IMAGES: usize = 3;

/// What: Build the RNG used for detail-panel shuffles.
///
/// Inputs:
/// - `seed`: Fixed seed for repeatable picks; `None` draws one from the thread RNG
///
/// Output: Seeded `StdRng`.
#[must_use]
pub fn detail_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        use rand::RngExt;
        rand::rng().random_range(0..u64::MAX)
    });
    tracing::debug!(seed, "[Detail] Shuffle seed");
    StdRng::seed_from_u64(seed)
}

/// What: Products sharing `product`'s category.
///
/// Inputs:
/// - `all`: Raw catalog
/// - `product`: Product being viewed
///
/// Output:
/// - Up to [`RELATED_LIMIT`] same-category products, excluding `product`, in catalog order.
#[must_use]
pub fn related_products(all: &[Product], product: &Product) -> Vec<Product> {
    all.iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

/// What: Random "popular this week" picks.
///
/// Inputs:
/// - `all`: Raw catalog
/// - `rng`: Shuffle source
///
/// Output:
/// - Up to [`POPULAR_LIMIT`] products in shuffled order; empty for an empty catalog.
#[must_use]
pub fn popular_products(all: &[Product], rng: &mut StdRng) -> Vec<Product> {
    let mut pool: Vec<&Product> = all.iter().collect();
    pool.shuffle(rng);
    pool.into_iter().take(POPULAR_LIMIT).cloned().collect()
}

/// What: Gallery image list for the detail view.
///
/// Inputs:
/// - `all`: Raw catalog
/// - `product`: Product being viewed
/// - `rng`: Shuffle source
///
/// Output:
/// - `product.image` first, then up to [`GALLERY_EXTRA_IMAGES`] images of other products.
#[must_use]
pub fn gallery_images(all: &[Product], product: &Product, rng: &mut StdRng) -> Vec<String> {
    let mut pool: Vec<&str> = all
        .iter()
        .filter(|p| p.id != product.id)
        .map(|p| p.image.as_str())
        .collect();
    pool.shuffle(rng);
    std::iter::once(product.image.clone())
        .chain(
            pool.into_iter()
                .take(GALLERY_EXTRA_IMAGES)
                .map(str::to_string),
        )
        .collect()
}

/// Everything the detail view shows next to the product itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanels {
    /// Same-category products.
    pub related: Vec<Product>,
    /// Random picks from the whole catalog.
    pub popular: Vec<Product>,
    /// Product image followed by borrowed images.
    pub gallery: Vec<String>,
}

/// What: Compute all detail side panels at once.
///
/// Inputs:
/// - `all`: Raw catalog
/// - `product`: Product being viewed
/// - `rng`: Shuffle source, consumed gallery-first then popular
///
/// Output: [`DetailPanels`].
#[must_use]
pub fn detail_panels(all: &[Product], product: &Product, rng: &mut StdRng) -> DetailPanels {
    let gallery = gallery_images(all, product, rng);
    DetailPanels {
        related: related_products(all, product),
        popular: popular_products(all, rng),
        gallery,
    }
}
