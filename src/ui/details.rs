use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::panel;
use super::theme::theme;
use crate::state::{AppState, DetailView, Product};
use crate::util::{format_price, star_bar, truncate_to_width};

/// What: Product detail pane with related, popular and gallery panels.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Pane rectangle
///
/// Output: Draws the pane for the current [`DetailView`].
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (product, panels) = match &app.detail {
        DetailView::Closed => return,
        DetailView::Loading { product_id } => {
            let p = Paragraph::new(format!("Loading product {product_id}…")).block(panel("Product"));
            f.render_widget(p, area);
            return;
        }
        DetailView::Failed { message } => {
            let p = Paragraph::new(Span::styled(message.clone(), Style::default().fg(th.red)))
                .block(panel("Product"));
            f.render_widget(p, area);
            return;
        }
        DetailView::Loaded { product, panels } => (product, panels),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let price = format_price(product.price, app.currency_rate, &app.currency_symbol);
    let mut lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.category.clone(),
            Style::default().fg(th.subtext0),
        )),
        Line::from(vec![
            Span::styled(price, Style::default().fg(th.green).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                star_bar(product.rating.rounded_stars()),
                Style::default().fg(th.yellow),
            ),
            Span::styled(
                format!(" {:.1} ({} ratings)", product.rating.rate, product.rating.count),
                Style::default().fg(th.subtext0),
            ),
        ]),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Quantity: ", Style::default().fg(th.sapphire)),
            Span::styled(
                format!("- {} +", app.quantity.get()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   (a) add to cart · Esc back",
                Style::default().fg(th.overlay1),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Gallery", Style::default().fg(th.mauve))),
    ];
    for img in &panels.gallery {
        lines.push(Line::from(Span::styled(
            format!("  {img}"),
            Style::default().fg(th.subtext0),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(&format!("Product #{}", product.id))),
        chunks[0],
    );

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let width = usize::from(chunks[1].width.saturating_sub(16));
    f.render_widget(
        Paragraph::new(product_lines(app, &panels.related, width)).block(panel("Related products")),
        side[0],
    );
    f.render_widget(
        Paragraph::new(product_lines(app, &panels.popular, width)).block(panel("Popular this week")),
        side[1],
    );
}

fn product_lines(app: &AppState, items: &[Product], width: usize) -> Vec<Line<'static>> {
    let th = theme();
    if items.is_empty() {
        return vec![Line::from(Span::styled(
            "Nothing to show",
            Style::default().fg(th.overlay1),
        ))];
    }
    items
        .iter()
        .map(|p| {
            Line::from(vec![
                Span::raw(truncate_to_width(&p.title, width)),
                Span::raw(" "),
                Span::styled(
                    format_price(p.price, app.currency_rate, &app.currency_symbol),
                    Style::default().fg(th.green),
                ),
            ])
        })
        .collect()
}
