//! Login, logout, registration and access gating on top of [`StoreApi`].

use crate::sources::{CreatedAccount, Credentials, Endpoint, NewAccount, StoreApi, StoreError};
use crate::state::Session;

/// Message reported when a gated view is opened without a session.
pub const AUTH_REQUIRED_MSG: &str = "Authentication required";
/// Confirmation shown after a successful login.
pub const LOGIN_SUCCESS_MSG: &str = "Login successful!";
/// Confirmation shown after a successful registration.
pub const REGISTER_SUCCESS_MSG: &str = "Registration successful! Please log in.";

/// What: Exchange credentials for a token and start the session.
///
/// Inputs:
/// - `api`: Store service
/// - `session`: Shared session, changed only on success
/// - `credentials`: Username and password
///
/// Output: The new token.
///
/// # Errors
/// - Any [`StoreError`] from the login call; the session is left as it was
/// - `StoreError::Decode` when the service answers 2xx with a blank token
///
/// Details:
/// - A second login while authenticated replaces the token.
pub async fn attempt_login<A: StoreApi>(
    api: &A,
    session: &Session,
    credentials: &Credentials,
) -> Result<String, StoreError> {
    tracing::debug!(username = %credentials.username, "[Auth] Login attempt");
    let token = match api.login(credentials).await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(username = %credentials.username, error = %e, "[Auth] Login failed");
            return Err(e);
        }
    };
    if !session.login(token.clone()) {
        return Err(StoreError::Decode {
            endpoint: Endpoint::Login,
            message: "empty token".to_string(),
        });
    }
    tracing::info!(username = %credentials.username, "[Auth] Logged in");
    Ok(token)
}

/// End the session. Safe to call when already logged out.
pub fn logout(session: &Session) {
    session.logout();
}

/// What: Check that every account field is filled in.
///
/// Inputs:
/// - `account`: Form contents
///
/// Output: `Err` naming the first blank field.
///
/// # Errors
/// - Returns `Err("<field> is required")` for a blank field
pub fn validate_account(account: &NewAccount) -> Result<(), String> {
    let fields = [
        ("First name", account.name.firstname.as_str()),
        ("Last name", account.name.lastname.as_str()),
        ("Email", account.email.as_str()),
        ("Username", account.username.as_str()),
        ("Password", account.password.as_str()),
    ];
    match fields.iter().find(|(_, v)| v.trim().is_empty()) {
        Some((label, _)) => Err(format!("{label} is required")),
        None => Ok(()),
    }
}

/// What: Create an account.
///
/// Inputs:
/// - `api`: Store service
/// - `account`: Filled-in account form
///
/// Output: Service confirmation.
///
/// # Errors
/// - Any [`StoreError`] from the registration call
///
/// Details:
/// - Never touches the session; the user logs in afterwards.
pub async fn register<A: StoreApi>(
    api: &A,
    account: &NewAccount,
) -> Result<CreatedAccount, StoreError> {
    let created = api.register(account).await.inspect_err(|e| {
        tracing::warn!(username = %account.username, error = %e, "[Auth] Registration failed");
    })?;
    tracing::info!(username = %account.username, id = ?created.id, "[Auth] Registered");
    Ok(created)
}

/// What: Gate a view on authentication.
///
/// Inputs:
/// - `session`: Shared session
///
/// Output: `Ok(token)` when authenticated.
///
/// # Errors
/// - Returns [`AUTH_REQUIRED_MSG`] when no session is active
pub fn require_auth(session: &Session) -> Result<String, &'static str> {
    session.token().ok_or(AUTH_REQUIRED_MSG)
}
