use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::helpers::panel;
use super::theme::theme;
use crate::logic::LoadState;
use crate::state::AppState;
use crate::util::{format_price, star_bar, truncate_to_width};

/// What: Product list for the current page, or the loading/error/empty notice.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (list selection state)
/// - `area`: List rectangle
///
/// Output: Draws the list and syncs `app.list_state` with the cursor.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let notice = |text: String, color: Color| {
        Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .wrap(Wrap { trim: true })
            .block(panel("Products"))
    };
    match app.catalog.state() {
        LoadState::Loading => {
            f.render_widget(notice("Loading products…".into(), th.subtext0), area);
            return;
        }
        LoadState::Failed(msg) => {
            f.render_widget(notice(msg.clone(), th.red), area);
            return;
        }
        LoadState::Loaded(_) => {}
    }
    let Some(page) = app.current_page() else {
        return;
    };
    if page.items.is_empty() {
        let text = if page.is_past_end() {
            "No products on this page.".to_string()
        } else {
            "No products match your filters.".to_string()
        };
        f.render_widget(notice(text, th.subtext0), area);
        return;
    }

    let title_w = usize::from(area.width.saturating_sub(30)).max(10);
    let items: Vec<ListItem> = page
        .items
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", truncate_to_width(&p.title, title_w), width = title_w),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{:>11}",
                        format_price(p.price, app.currency_rate, &app.currency_symbol)
                    ),
                    Style::default().fg(th.green),
                ),
                Span::raw(" "),
                Span::styled(
                    star_bar(p.rating.rounded_stars()),
                    Style::default().fg(th.yellow),
                ),
                Span::styled(
                    format!(" ({})", p.rating.count),
                    Style::default().fg(th.subtext0),
                ),
            ]))
        })
        .collect();

    let title = format!(
        "Products · {} found · page {}/{}",
        page.filtered_count,
        page.page,
        page.page_count.max(1)
    );
    let list = List::new(items)
        .block(panel(&title))
        .highlight_style(
            Style::default()
                .fg(th.base)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    app.list_state.select(Some(app.selected));
    f.render_stateful_widget(list, area, &mut app.list_state);
}
