//! Command-line argument definition.

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::state::SortKey;

/// storefront - browse the demo product catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Browse the demo product catalog, log in and register from the terminal", long_about = None)]
pub struct Args {
    /// Store API root (overrides settings.toml)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fixed seed for the "popular" and gallery shuffles
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Run one command and exit; without a command the terminal browser starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of products
    Products(ProductsArgs),
    /// List product categories
    Categories,
    /// Show one product with related and popular picks
    Product {
        /// Product id
        id: u64,
    },
    /// Show customer reviews with optional filters
    Reviews(ReviewsArgs),
    /// Log in and remember the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,
        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the saved session
    Logout,
    /// Create an account
    Register(RegisterArgs),
    /// Show the logged-in account (requires login)
    Profile,
}

/// Catalog filters for `products`.
#[derive(ClapArgs, Debug, Default)]
pub struct ProductsArgs {
    /// Case-insensitive title substring
    #[arg(short, long)]
    pub search: Option<String>,
    /// Exact category name ("All" for every category)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Lowest price (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,
    /// Highest price (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,
    /// Minimum rounded star rating, 0-5
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub min_rating: Option<u8>,
    /// Sort order: popular, price-asc, price-desc
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortKey>,
    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Review filters for `reviews`.
#[derive(ClapArgs, Debug, Default)]
pub struct ReviewsArgs {
    /// Only these star ratings (repeatable)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Vec<u8>,
    /// Only these topics (repeatable), e.g. "quality", "shipment"
    #[arg(short, long)]
    pub topic: Vec<String>,
    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Account fields for `register`.
#[derive(ClapArgs, Debug)]
pub struct RegisterArgs {
    /// Contact email
    #[arg(long)]
    pub email: String,
    /// Desired username
    #[arg(short, long)]
    pub username: String,
    /// Given name
    #[arg(long)]
    pub first: String,
    /// Family name
    #[arg(long)]
    pub last: String,
    /// Desired password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::from_config_key(s)
        .ok_or_else(|| format!("unknown sort '{s}' (expected popular, price-asc, price-desc)"))
}
