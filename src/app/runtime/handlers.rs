use crate::app::persist::save_session_token;
use crate::logic::auth::LOGIN_SUCCESS_MSG;
use crate::state::{AppState, Modal};

/// What: Apply the outcome of a login submission.
///
/// Inputs:
/// - `app`: Application state
/// - `result`: Token on success, inline error message on failure
///
/// Output: None
///
/// Details:
/// - Success persists the token and closes the form, continuing to the profile
///   when the form was opened by the profile gate.
/// - Failure is shown inside the form when it is still open, else in the footer.
pub fn handle_login_result(app: &mut AppState, result: Result<String, String>) {
    match result {
        Ok(token) => {
            save_session_token(&app.session_path, &token);
            let redirect = matches!(&app.modal, Modal::Login(form) if form.redirect_to_profile);
            app.modal = if redirect {
                Modal::Profile { token }
            } else {
                Modal::None
            };
            app.toast = Some(LOGIN_SUCCESS_MSG.to_string());
        }
        Err(message) => {
            if let Modal::Login(form) = &mut app.modal {
                form.busy = false;
                form.error = Some(message);
            } else {
                app.toast = Some(message);
            }
        }
    }
}
