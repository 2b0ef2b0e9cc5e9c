use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::panel;
use super::theme::theme;
use crate::state::{AppState, AuthStatus};

/// Store name, search input and session status.
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let status = match app.session.status() {
        AuthStatus::Authenticated => Span::styled("● Signed in", Style::default().fg(th.green)),
        AuthStatus::Unauthenticated => {
            Span::styled("○ Guest (Ctrl-L to log in)", Style::default().fg(th.subtext0))
        }
    };
    let search = if app.filter.search.is_empty() {
        Span::styled("type to search products…", Style::default().fg(th.overlay1))
    } else {
        Span::styled(app.filter.search.clone(), Style::default().fg(th.text))
    };
    let line = Line::from(vec![
        Span::styled(
            "STOREFRONT  ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Search: ", Style::default().fg(th.sapphire)),
        search,
        Span::raw("   "),
        status,
    ]);
    f.render_widget(Paragraph::new(line).block(panel("Shop")), area);
}
