//! `reviews` command over the demo review set.

use std::fmt::Write;

use super::{CliError, ReviewsArgs};
use crate::logic::reviews::{
    REVIEWS, ReviewFilter, ReviewPage, ReviewStats, ReviewTopic, review_page, review_stats,
};
use crate::util::star_bar;

/// What: Build a review filter from command-line selections.
///
/// Inputs:
/// - `args`: Ratings, topics and page
///
/// Output: Filter with every selection toggled on.
///
/// # Errors
/// - `CliError::Input` naming an unknown topic
pub fn build_review_filter(args: &ReviewsArgs) -> Result<ReviewFilter, CliError> {
    let mut filter = ReviewFilter::default();
    for &stars in &args.rating {
        if !filter.ratings.contains(&stars) {
            filter.toggle_rating(stars);
        }
    }
    for raw in &args.topic {
        let topic = ReviewTopic::parse(raw).ok_or_else(|| {
            let known: Vec<&str> = ReviewTopic::ALL.iter().map(|t| t.label()).collect();
            CliError::Input(format!("Unknown topic '{raw}'. Known topics: {}", known.join(", ")))
        })?;
        if !filter.topics.contains(&topic) {
            filter.toggle_topic(topic);
        }
    }
    filter.page = args.page.max(1);
    Ok(filter)
}

/// Render the statistics header and one page of reviews.
#[must_use]
pub fn render_reviews(stats: &ReviewStats, page: &ReviewPage<'_>, page_no: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Customer reviews: {:.1} out of 5 ({} reviews)",
        stats.average, stats.total
    );
    for (stars, count) in stats.distribution {
        let _ = writeln!(out, "  {} {count}", star_bar(stars));
    }
    out.push('\n');
    if page.filtered_count == 0 {
        out.push_str("No reviews match the selected filters.\n");
        return out;
    }
    if page.items.is_empty() {
        let _ = writeln!(
            out,
            "No reviews on page {page_no} (last page is {}).",
            page.page_count
        );
        return out;
    }
    for r in &page.items {
        let verified = if r.verified { " · Verified purchase" } else { "" };
        let _ = writeln!(out, "{} {}", star_bar(r.rating), r.title);
        let _ = writeln!(out, "  by {} on {} · {}{verified}", r.author, r.date, r.topic.label());
        let _ = writeln!(out, "  {}", r.content);
        let _ = writeln!(out, "  {} people found this helpful\n", r.helpful);
    }
    let _ = writeln!(
        out,
        "Page {page_no} of {} · {} reviews",
        page.page_count, page.filtered_count
    );
    out
}

/// What: `reviews`: print statistics and a filtered page of reviews.
///
/// Inputs:
/// - `args`: Filters and page
///
/// Output: Rendered reviews.
///
/// # Errors
/// - `CliError::Input` for an unknown topic
pub fn handle_reviews(args: &ReviewsArgs) -> Result<String, CliError> {
    let filter = build_review_filter(args)?;
    let stats = review_stats(&REVIEWS);
    let page = review_page(&REVIEWS, &filter);
    Ok(render_reviews(&stats, &page, filter.page))
}
