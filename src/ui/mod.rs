//! Rendering for the terminal storefront.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;

mod details;
mod header;
mod helpers;
mod modals;
mod results;
mod sidebar;
mod theme;

use theme::theme;

/// What: Draw one frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (list selection state)
///
/// Output: Header, sidebar, product list or detail pane, footer, and any modal.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);
    header::render_header(f, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(rows[1]);
    sidebar::render_sidebar(f, app, body[0]);
    if app.detail.is_open() {
        details::render_details(f, app, body[1]);
    } else {
        results::render_results(f, app, body[1]);
    }

    let footer = match &app.toast {
        Some(msg) => Span::styled(msg.clone(), Style::default().fg(th.green)),
        None => Span::styled(
            "F1 help · Enter open · Ctrl-P profile · Ctrl-C quit",
            Style::default().fg(th.overlay1),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(footer)), rows[2]);

    modals::render_modal(f, app, area);
}
