use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::panel;
use super::theme::theme;
use crate::state::{ALL_CATEGORIES, AppState};
use crate::util::{format_price, star_bar, truncate_to_width};

/// What: Filter sidebar: categories, price ceiling, minimum rating, sort.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Sidebar rectangle
///
/// Output: Draws the sidebar; the active category is highlighted.
pub fn render_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let inner_w = usize::from(area.width.saturating_sub(4));
    let active = app.filter.category.as_deref().unwrap_or(ALL_CATEGORIES);
    let heading = |s: &'static str| {
        Line::from(Span::styled(
            s,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![heading("Categories (Tab)")];
    for cat in app.catalog.categories() {
        let style = if cat == active {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        let marker = if cat == active { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", truncate_to_width(&cat, inner_w.saturating_sub(2))),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("Max price (F4/F5)"));
    lines.push(Line::from(Span::styled(
        format!(
            "  {} – {}",
            format_price(app.filter.price.min, app.currency_rate, &app.currency_symbol),
            format_price(app.filter.price.max, app.currency_rate, &app.currency_symbol)
        ),
        Style::default().fg(th.green),
    )));
    lines.push(Line::from(""));
    lines.push(heading("Min rating (F3)"));
    let rating = if app.filter.min_rating == 0 {
        "  Any".to_string()
    } else {
        format!("  {} & up", star_bar(app.filter.min_rating))
    };
    lines.push(Line::from(Span::styled(rating, Style::default().fg(th.yellow))));
    lines.push(Line::from(""));
    lines.push(heading("Sort (F2)"));
    lines.push(Line::from(format!("  {}", app.sort_label())));

    f.render_widget(Paragraph::new(lines).block(panel("Filters")), area);
}
