use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Requests;
use crate::state::{AppState, Modal};

/// Message shown when the login form is submitted incomplete.
const MISSING_FIELDS_MSG: &str = "Please enter username and password.";

/// Route a key press to the open modal.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    match &mut app.modal {
        Modal::Login(form) => match ke.code {
            KeyCode::Esc => app.modal = Modal::None,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if form.busy {
                    return;
                }
                if !form.is_complete() {
                    form.error = Some(MISSING_FIELDS_MSG.to_string());
                    return;
                }
                form.error = None;
                if requests.login_tx.send(form.credentials()).is_ok() {
                    form.busy = true;
                } else {
                    tracing::warn!("[Events] Login worker is gone");
                    form.error = Some("Failed to login.".to_string());
                }
            }
            KeyCode::Char(ch) if !form.busy && !ke.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(ch);
            }
            _ => {}
        },
        Modal::Alert { .. } | Modal::Profile { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
                app.modal = Modal::None;
            }
        }
        Modal::None => {}
    }
}
