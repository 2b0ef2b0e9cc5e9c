//! Terminal storefront runtime: setup, workers, event loop and persistence.

pub mod persist;
mod runtime;
pub mod terminal;

pub use runtime::run;
