//! Modal dialog state for the UI.

use zeroize::Zeroizing;

use crate::sources::Credentials;

/// Which login form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    /// Username input.
    #[default]
    Username,
    /// Password input (rendered masked).
    Password,
}

/// What: Contents and status of the login popup.
///
/// - Input: Edited by key events while the popup is open.
/// - Output: Converted to [`Credentials`] on submit.
/// - Details: `redirect_to_profile` remembers that the popup was opened by a
///   gated view, so a successful login continues there.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Username buffer.
    pub username: String,
    /// Password buffer, wiped on drop.
    pub password: Zeroizing<String>,
    /// Focused field.
    pub field: LoginField,
    /// Inline error from the last attempt.
    pub error: Option<String>,
    /// A login request is in flight.
    pub busy: bool,
    /// Open the profile view after a successful login.
    pub redirect_to_profile: bool,
}

impl LoginForm {
    /// Append a character to the focused field.
    pub fn push_char(&mut self, ch: char) {
        match self.field {
            LoginField::Username => self.username.push(ch),
            LoginField::Password => self.password.push(ch),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.field {
            LoginField::Username => {
                self.username.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }

    /// Move focus to the other field.
    pub const fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Both fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Snapshot the form as request credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.trim(), self.password.as_str())
    }
}

/// Active popup over the storefront.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// No popup.
    #[default]
    None,
    /// Informational alert with a non-interactive message.
    Alert { message: String },
    /// Login popup.
    Login(LoginForm),
    /// Account view; only reachable with a session.
    Profile {
        /// Token shown (abbreviated) as proof of the session.
        token: String,
    },
    /// Key binding reference.
    Help,
}

impl Modal {
    /// Whether no popup is open.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Login form edits the focused field and builds credentials
    ///
    /// - Input: Type "jo", switch field, type "pw!", backspace once
    /// - Output: username "jo", password "pw", complete form
    fn login_form_editing() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.push_char('j');
        form.push_char('o');
        form.toggle_field();
        for c in "pw!".chars() {
            form.push_char(c);
        }
        form.backspace();
        assert_eq!(form.field, LoginField::Password);
        assert!(form.is_complete());
        let creds = form.credentials();
        assert_eq!(creds.username, "jo");
        assert_eq!(creds.password.as_str(), "pw");
    }

    #[test]
    /// What: Default modal is `None`
    ///
    /// - Input: `Modal::default()`
    /// - Output: `is_none()` true; other variants false
    fn modal_default_is_none() {
        assert!(Modal::default().is_none());
        assert!(!Modal::Help.is_none());
    }
}
