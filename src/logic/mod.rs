//! Core non-UI logic: the catalog pipeline, detail panels, reviews and auth flows.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod filter;
pub mod paginate;
pub mod related;
pub mod reviews;
pub mod sequence;
pub mod sort;

// Re-export the pieces callers reach for most (crate::logic::...)
pub use auth::{AUTH_REQUIRED_MSG, attempt_login, logout, register, require_auth};
pub use catalog::{CatalogPage, CatalogView, LoadState, categories, derive_page};
pub use filter::apply_filters;
pub use paginate::{PRODUCTS_PER_PAGE, REVIEWS_PER_PAGE, page_count, page_slice};
pub use related::{DetailPanels, detail_panels, detail_rng};
pub use sequence::RequestSequence;
pub use sort::sort_products;
