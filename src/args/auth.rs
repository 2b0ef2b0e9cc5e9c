//! `login`, `logout`, `register` and `profile` commands.

use std::fmt::Write;

use super::utils::password_or_prompt;
use super::{CliContext, CliError, RegisterArgs};
use crate::app::persist::{clear_session_token, save_session_token};
use crate::logic::auth::{
    LOGIN_SUCCESS_MSG, REGISTER_SUCCESS_MSG, attempt_login, logout, register, require_auth,
    validate_account,
};
use crate::sources::{Credentials, NewAccount, PersonName, StoreApi};
use crate::util::abbreviate_token;

/// What: `login`: exchange credentials for a token and persist it.
///
/// Inputs:
/// - `ctx`: Command context
/// - `username`: Account username
/// - `password`: Password from the command line; prompted when `None`
///
/// Output: Success message.
///
/// # Errors
/// - `CliError::Store` with the inline login message on rejection
/// - `CliError::Io` when the password prompt fails
pub async fn handle_login<A: StoreApi>(
    ctx: &CliContext<A>,
    username: &str,
    password: Option<&str>,
) -> Result<String, CliError> {
    let password = password_or_prompt(password)?;
    let credentials = Credentials {
        username: username.trim().to_string(),
        password,
    };
    let token = attempt_login(&ctx.api, &ctx.session, &credentials).await?;
    save_session_token(&ctx.session_path, &token);
    Ok(format!("{LOGIN_SUCCESS_MSG}\n"))
}

/// `logout`: end the session and forget the saved token. Always succeeds.
pub fn handle_logout<A>(ctx: &CliContext<A>) -> String {
    let was_in = ctx.session.is_authenticated();
    logout(&ctx.session);
    clear_session_token(&ctx.session_path);
    if was_in {
        "Logged out.\n".to_string()
    } else {
        "Not logged in.\n".to_string()
    }
}

/// What: `register`: create an account.
///
/// Inputs:
/// - `ctx`: Command context
/// - `args`: Account fields
///
/// Output: Confirmation pointing to `login`.
///
/// # Errors
/// - `CliError::Input` for a blank field
/// - `CliError::Store` with the registration message on rejection
pub async fn handle_register<A: StoreApi>(
    ctx: &CliContext<A>,
    args: &RegisterArgs,
) -> Result<String, CliError> {
    let password = password_or_prompt(args.password.as_deref())?;
    let account = NewAccount {
        email: args.email.trim().to_string(),
        username: args.username.trim().to_string(),
        password,
        name: PersonName {
            firstname: args.first.trim().to_string(),
            lastname: args.last.trim().to_string(),
        },
    };
    validate_account(&account).map_err(CliError::Input)?;
    let created = register(&ctx.api, &account).await?;
    let mut out = String::from(REGISTER_SUCCESS_MSG);
    if let Some(id) = created.id {
        let _ = write!(out, " (account #{id})");
    }
    out.push('\n');
    Ok(out)
}

/// What: `profile`: show the session, gated on login.
///
/// Inputs:
/// - `ctx`: Command context
///
/// Output: Account summary.
///
/// # Errors
/// - `CliError::Unauthorized` when no session is active
pub fn handle_profile<A>(ctx: &CliContext<A>) -> Result<String, CliError> {
    let token = require_auth(&ctx.session).map_err(CliError::Unauthorized)?;
    Ok(format!(
        "My Account\n  Status:  logged in\n  Session: {}\n",
        abbreviate_token(&token)
    ))
}
