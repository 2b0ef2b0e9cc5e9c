//! Library entry for storefront exposing the catalog, session, API client and
//! runtime for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
