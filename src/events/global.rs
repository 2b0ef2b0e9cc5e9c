use crossterm::event::{KeyCode, KeyEvent};

use super::is_ctrl;
use crate::app::persist::clear_session_token;
use crate::logic::{logout, require_auth};
use crate::state::{AppState, LoginForm, Modal};

/// What: Handle shortcuts that work everywhere.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Application state
///
/// Output: `true` when the key was consumed.
///
/// Details:
/// - Ctrl-L login form, Ctrl-O logout, Ctrl-P profile (gated), F1 help.
/// - Ignored while the login form is open so its text fields get the keys.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if matches!(app.modal, Modal::Login(_)) {
        return false;
    }
    if is_ctrl(&ke, 'l') {
        if app.session.is_authenticated() {
            app.toast = Some("Already logged in".to_string());
        } else {
            app.modal = Modal::Login(LoginForm::default());
        }
        return true;
    }
    if is_ctrl(&ke, 'o') {
        if app.session.is_authenticated() {
            logout(&app.session);
            clear_session_token(&app.session_path);
            app.toast = Some("Logged out".to_string());
        }
        if matches!(app.modal, Modal::Profile { .. }) {
            app.modal = Modal::None;
        }
        return true;
    }
    if is_ctrl(&ke, 'p') {
        open_profile(app);
        return true;
    }
    if ke.code == KeyCode::F(1) {
        app.modal = Modal::Help;
        return true;
    }
    false
}

/// Open the profile, or the login form with a redirect when signed out.
fn open_profile(app: &mut AppState) {
    match require_auth(&app.session) {
        Ok(token) => app.modal = Modal::Profile { token },
        Err(msg) => {
            tracing::debug!("[Events] Profile requested without a session");
            app.toast = Some(msg.to_string());
            app.modal = Modal::Login(LoginForm {
                redirect_to_profile: true,
                ..LoginForm::default()
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::events::test_support::{ctrl, harness};
    use crate::logic::AUTH_REQUIRED_MSG;
    use crate::state::Modal;

    #[test]
    /// What: Profile is gated on the session
    ///
    /// - Input: Ctrl-P signed out; then signed in
    /// - Output: Login form with redirect and the gate message; then the profile
    fn profile_gate() {
        let mut h = harness();
        h.press(ctrl('p'));
        assert!(matches!(&h.app.modal, Modal::Login(f) if f.redirect_to_profile));
        assert_eq!(h.app.toast.as_deref(), Some(AUTH_REQUIRED_MSG));

        h.app.modal = Modal::None;
        assert!(h.app.session.login("abc"));
        h.press(ctrl('p'));
        assert!(matches!(&h.app.modal, Modal::Profile { token } if token == "abc"));
    }

    #[test]
    /// What: Logout clears the session, the token file, and closes the profile
    ///
    /// - Input: Signed in with a saved token and the profile open; Ctrl-O
    /// - Output: Unauthenticated, file gone, no modal
    fn logout_clears_everything() {
        let mut h = harness();
        h.app.session.login("abc");
        crate::app::persist::save_session_token(&h.app.session_path, "abc");
        h.app.modal = Modal::Profile { token: "abc".into() };
        h.press(ctrl('o'));
        assert!(!h.app.session.is_authenticated());
        assert!(!h.app.session_path.exists());
        assert!(h.app.modal.is_none());
    }
}
