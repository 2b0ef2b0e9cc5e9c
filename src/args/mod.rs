//! Command-line argument parsing and one-shot command handlers.

use std::fmt;
use std::path::PathBuf;

use crate::config::Settings;
use crate::sources::{StoreApi, StoreError};
use crate::state::Session;

pub mod auth;
pub mod definition;
pub mod product;
pub mod products;
pub mod reviews;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, Command, ProductsArgs, RegisterArgs, ReviewsArgs};
pub use utils::determine_log_level;

/// Failure of a one-shot command; printed to stderr with exit status 1.
#[derive(Debug)]
pub enum CliError {
    /// Store API call failed.
    Store(StoreError),
    /// Bad input caught before any request was made.
    Input(String),
    /// Command needs a logged-in session.
    Unauthorized(&'static str),
    /// Terminal I/O failed (password prompt).
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => f.write_str(&e.user_message()),
            Self::Input(msg) => f.write_str(msg),
            Self::Unauthorized(msg) => write!(f, "{msg}. Run `storefront login -u <username>` first."),
            Self::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Input(_) | Self::Unauthorized(_) => None,
        }
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Everything a one-shot command needs.
#[derive(Debug)]
pub struct CliContext<A> {
    /// Store service.
    pub api: A,
    /// Loaded settings.
    pub settings: Settings,
    /// Session restored from disk (if any).
    pub session: Session,
    /// Token file location.
    pub session_path: PathBuf,
    /// Fixed shuffle seed.
    pub seed: Option<u64>,
}

/// What: Run one command and return the text to print.
///
/// Inputs:
/// - `command`: Parsed subcommand
/// - `ctx`: Service, settings and session
///
/// Output: Text for stdout.
///
/// # Errors
/// - [`CliError`] describing the failure in user terms
pub async fn run_command<A: StoreApi>(
    command: &Command,
    ctx: &CliContext<A>,
) -> Result<String, CliError> {
    tracing::debug!(?command, "[Cli] Running command");
    match command {
        Command::Products(args) => products::handle_products(ctx, args).await,
        Command::Categories => products::handle_categories(ctx).await,
        Command::Product { id } => product::handle_product(ctx, *id).await,
        Command::Reviews(args) => reviews::handle_reviews(args),
        Command::Login { username, password } => {
            auth::handle_login(ctx, username, password.as_deref()).await
        }
        Command::Logout => Ok(auth::handle_logout(ctx)),
        Command::Register(args) => auth::handle_register(ctx, args).await,
        Command::Profile => auth::handle_profile(ctx),
    }
}
