//! `product <ID>` command.

use std::fmt::Write;

use super::products::product_row;
use super::{CliContext, CliError};
use crate::config::Settings;
use crate::logic::{DetailPanels, detail_panels, detail_rng};
use crate::sources::StoreApi;
use crate::state::Product;
use crate::util::{format_price, star_bar};

/// What: Render a product with its side panels.
///
/// Inputs:
/// - `product`: Product to show
/// - `panels`: Related, popular and gallery panels
/// - `settings`: Currency settings
///
/// Output: Multi-section text block.
#[must_use]
pub fn render_product(product: &Product, panels: &DetailPanels, settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", product.title, product.id);
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(
        out,
        "Price:    {}",
        format_price(product.price, settings.currency_rate, &settings.currency_symbol)
    );
    let _ = writeln!(
        out,
        "Rating:   {} {:.1} ({} ratings)",
        star_bar(product.rating.rounded_stars()),
        product.rating.rate,
        product.rating.count
    );
    if !product.description.is_empty() {
        let _ = writeln!(out, "\n{}", product.description);
    }
    let _ = writeln!(out, "\nGallery:");
    for img in &panels.gallery {
        let _ = writeln!(out, "  {img}");
    }
    for (heading, items) in [
        ("Related products", &panels.related),
        ("Popular this week", &panels.popular),
    ] {
        let _ = writeln!(out, "\n{heading}:");
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for p in items {
            let _ = writeln!(out, "  {}", product_row(p, settings));
        }
    }
    out
}

/// What: `product <ID>`: fetch the product and the catalog, then print both.
///
/// Inputs:
/// - `ctx`: Command context (the seed fixes the shuffles)
/// - `id`: Product id
///
/// Output: Rendered product.
///
/// # Errors
/// - `CliError::Store` with `NotFound` for an unknown id, or any fetch failure
pub async fn handle_product<A: StoreApi>(ctx: &CliContext<A>, id: u64) -> Result<String, CliError> {
    let (product, all) = futures::join!(ctx.api.fetch_product(id), ctx.api.fetch_products());
    let product = product?;
    let all = all?;
    let panels = detail_panels(&all, &product, &mut detail_rng(ctx.seed));
    Ok(render_product(&product, &panels, &ctx.settings))
}
