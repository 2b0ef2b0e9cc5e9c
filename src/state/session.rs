//! Shared authentication state.
//!
//! A [`Session`] is a cheap cloneable handle around one token slot. Every
//! consumer that needs to gate on authentication receives a clone of the same
//! handle, so a `login`/`logout` through any clone is visible to all others
//! immediately.

use std::sync::{Arc, RwLock};

/// Authentication status derived from the held token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// No token held.
    Unauthenticated,
    /// A token is held.
    Authenticated,
}

/// Handle to the process-wide session slot.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Opaque bearer token; `None` while signed out.
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// What: Create an unauthenticated session.
    ///
    /// Inputs: None
    ///
    /// Output: Fresh handle with no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Create a session already holding `token` (restored from disk).
    ///
    /// Inputs:
    /// - `token`: Previously persisted token; blank tokens are ignored
    ///
    /// Output: Authenticated handle, or unauthenticated when `token` is blank.
    #[must_use]
    pub fn restored(token: Option<String>) -> Self {
        let s = Self::new();
        if let Some(t) = token {
            let _ = s.login(t);
        }
        s
    }

    /// What: Record a token and flip to authenticated.
    ///
    /// Inputs:
    /// - `token`: Token returned by a successful login exchange
    ///
    /// Output:
    /// - `true` when the token was recorded; `false` for a blank token, in
    ///   which case the state is left untouched.
    pub fn login(&self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.trim().is_empty() {
            tracing::warn!("[Session] Ignoring login with blank token");
            return false;
        }
        match self.token.write() {
            Ok(mut slot) => {
                *slot = Some(token);
                tracing::info!("[Session] Authenticated");
                true
            }
            Err(poisoned) => {
                *poisoned.into_inner() = Some(token);
                tracing::info!("[Session] Authenticated (recovered lock)");
                true
            }
        }
    }

    /// Clear the token and flip to unauthenticated. Idempotent.
    pub fn logout(&self) {
        match self.token.write() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
        tracing::info!("[Session] Signed out");
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Whether a token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// Current [`AuthStatus`].
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        let held = match self.token.read() {
            Ok(slot) => slot.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        };
        if held {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}
