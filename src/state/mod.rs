//! Application state: domain types, the shared session, and the TUI container.

pub mod app_state;
pub mod modal;
pub mod session;
pub mod types;

// Public re-exports so callers use `crate::state::*`
pub use app_state::{AppState, DetailView};
pub use modal::{LoginField, LoginForm, Modal};
pub use session::{AuthStatus, Session};
pub use types::{
    ALL_CATEGORIES, DetailRequest, DetailResponse, FilterState, PriceRange, Product, Rating,
    SortKey,
};
