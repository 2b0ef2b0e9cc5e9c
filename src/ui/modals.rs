use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::helpers::{centered_rect, panel};
use super::theme::theme;
use crate::state::{AppState, LoginField, LoginForm, Modal};
use crate::util::abbreviate_token;

const HELP_LINES: [(&str, &str); 14] = [
    ("type", "search by title"),
    ("Up/Down", "move selection"),
    ("PgUp/PgDn, Left/Right", "change page"),
    ("Tab/Shift-Tab", "cycle category"),
    ("F2", "cycle sort"),
    ("F3", "cycle minimum rating"),
    ("F4/F5", "lower/raise max price"),
    ("Enter", "open product"),
    ("+/-, a", "quantity, add to cart"),
    ("Ctrl-L", "log in"),
    ("Ctrl-O", "log out"),
    ("Ctrl-P", "profile"),
    ("Esc", "close / back"),
    ("Ctrl-C", "quit"),
];

/// Draw the open modal, if any, over `area`.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, area, message),
        Modal::Login(form) => render_login(f, area, form),
        Modal::Profile { token } => render_profile(f, area, token),
        Modal::Help => render_help(f, area),
    }
}

fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let rect = centered_rect(area, 60, 7);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc to close",
            Style::default().fg(theme().overlay1),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(panel("Notice"));
    f.render_widget(p, rect);
}

/// What: Login popup with masked password and inline error.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the popup
/// - `form`: Form contents
///
/// Output: Draws the popup; the focused field is highlighted.
fn render_login(f: &mut Frame, area: Rect, form: &LoginForm) {
    let th = theme();
    let rect = centered_rect(area, 56, 11);
    f.render_widget(Clear, rect);
    let field_style = |field: LoginField| {
        if form.field == field {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        }
    };
    let masked = "•".repeat(form.password.chars().count());
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome Back!",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Username: ", field_style(LoginField::Username)),
            Span::raw(form.username.clone()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(LoginField::Password)),
            Span::raw(masked),
        ]),
        Line::from(""),
    ];
    if form.busy {
        lines.push(Line::from(Span::styled(
            "Logging in…",
            Style::default().fg(th.subtext0),
        )));
    } else if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(th.red))));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab switch field · Enter submit · Esc cancel",
            Style::default().fg(th.overlay1),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(panel("Login")), rect);
}

fn render_profile(f: &mut Frame, area: Rect, token: &str) {
    let th = theme();
    let rect = centered_rect(area, 56, 8);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(vec![
        Line::from(Span::styled(
            "My Account",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Session: ", Style::default().fg(th.sapphire)),
            Span::raw(abbreviate_token(token)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Ctrl-O log out · Esc close",
            Style::default().fg(th.overlay1),
        )),
    ])
    .block(panel("Profile"));
    f.render_widget(p, rect);
}

fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let height = u16::try_from(HELP_LINES.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = centered_rect(area, 60, height);
    f.render_widget(Clear, rect);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(k, v)| {
            Line::from(vec![
                Span::styled(format!("{k:<24}"), Style::default().fg(th.sapphire)),
                Span::raw(*v),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(panel("Keys")), rect);
}
