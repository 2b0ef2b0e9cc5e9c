//! `products` and `categories` commands.

use std::fmt::Write;

use super::{CliContext, CliError, ProductsArgs};
use crate::config::Settings;
use crate::logic::{CatalogPage, categories, derive_page};
use crate::sources::StoreApi;
use crate::state::{FilterState, Product};
use crate::util::{format_price, star_bar, truncate_to_width};

/// Title column width in listings.
const TITLE_WIDTH: usize = 44;

/// What: Build the filter state for a `products` invocation.
///
/// Inputs:
/// - `args`: Command-line filters
/// - `settings`: Defaults for price bounds and sort
///
/// Output: Filter state; unset options keep the settings defaults.
#[must_use]
pub fn build_filter(args: &ProductsArgs, settings: &Settings) -> FilterState {
    let mut filter = FilterState {
        search: args.search.clone().unwrap_or_default(),
        price: settings.price,
        min_rating: args.min_rating.unwrap_or(0),
        sort: args.sort.unwrap_or(settings.default_sort),
        page: args.page,
        ..FilterState::default()
    };
    if let Some(cat) = &args.category {
        filter.select_category(cat);
        filter.page = args.page;
    }
    if let Some(min) = args.min_price {
        filter.price.min = min;
    }
    if let Some(max) = args.max_price {
        filter.price.max = max;
    }
    filter
}

/// One listing row: id, title, price, stars, rating count and category.
pub(super) fn product_row(p: &Product, settings: &Settings) -> String {
    format!(
        "#{:<4} {:<width$} {:>12}  {} ({:>3})  {}",
        p.id,
        truncate_to_width(&p.title, TITLE_WIDTH),
        format_price(p.price, settings.currency_rate, &settings.currency_symbol),
        star_bar(p.rating.rounded_stars()),
        p.rating.count,
        p.category,
        width = TITLE_WIDTH,
    )
}

/// What: Render a catalog page as plain text.
///
/// Inputs:
/// - `page`: Derived page
/// - `settings`: Currency settings
///
/// Output: Listing followed by a page summary line.
#[must_use]
pub fn render_page(page: &CatalogPage, settings: &Settings) -> String {
    let mut out = String::new();
    if page.filtered_count == 0 {
        out.push_str("No products match your filters.\n");
        return out;
    }
    if page.is_past_end() {
        let _ = writeln!(
            out,
            "No products on page {} (last page is {}).",
            page.page, page.page_count
        );
        return out;
    }
    for p in &page.items {
        let _ = writeln!(out, "{}", product_row(p, settings));
    }
    let _ = writeln!(
        out,
        "Page {} of {} · {} products",
        page.page, page.page_count, page.filtered_count
    );
    out
}

/// What: `products`: fetch the catalog and print one filtered page.
///
/// Inputs:
/// - `ctx`: Command context
/// - `args`: Filters and page
///
/// Output: Rendered page.
///
/// # Errors
/// - `CliError::Store` when the catalog cannot be fetched
pub async fn handle_products<A: StoreApi>(
    ctx: &CliContext<A>,
    args: &ProductsArgs,
) -> Result<String, CliError> {
    let products = ctx.api.fetch_products().await?;
    let filter = build_filter(args, &ctx.settings);
    let page = derive_page(&products, &filter, ctx.settings.page_size);
    tracing::info!(
        filtered = page.filtered_count,
        page = page.page,
        pages = page.page_count,
        "[Cli] Product page derived"
    );
    Ok(render_page(&page, &ctx.settings))
}

/// What: `categories`: print "All" and every category in first-seen order.
///
/// Inputs:
/// - `ctx`: Command context
///
/// Output: One category per line.
///
/// # Errors
/// - `CliError::Store` when the catalog cannot be fetched
pub async fn handle_categories<A: StoreApi>(ctx: &CliContext<A>) -> Result<String, CliError> {
    let products = ctx.api.fetch_products().await?;
    Ok(categories(&products)
        .into_iter()
        .map(|c| c + "\n")
        .collect())
}
