//! Remote store API: wire payloads, the [`StoreApi`] seam, and the reqwest
//! implementation.

use std::future::Future;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::state::Product;

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, HttpStore};
pub use error::{Endpoint, INVALID_CREDENTIALS_MSG, REGISTRATION_FAILED_MSG, StoreError};

/// Result alias for store API calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Username/password pair for `POST /auth/login`.
///
/// The password is wiped from memory on drop.
#[derive(Clone)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: Zeroizing<String>,
}

impl Credentials {
    /// Build credentials from plain strings.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Person name as nested in the account payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
}

/// Account fields for `POST /users`.
#[derive(Clone)]
pub struct NewAccount {
    /// Contact email.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Desired password, wiped on drop.
    pub password: Zeroizing<String>,
    /// Display name.
    pub name: PersonName,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Confirmation returned by `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedAccount {
    /// Server-assigned id, when the service reports one.
    #[serde(default)]
    pub id: Option<u64>,
}

/// Remote product and auth service.
///
/// The reqwest-backed [`HttpStore`] is the production implementation; the
/// login/registration flows in [`crate::logic::auth`] accept any implementor.
pub trait StoreApi: Send + Sync {
    /// `GET /products`: the full catalog snapshot.
    fn fetch_products(&self) -> impl Future<Output = StoreResult<Vec<Product>>> + Send;

    /// `GET /products/{id}`: one product.
    fn fetch_product(&self, id: u64) -> impl Future<Output = StoreResult<Product>> + Send;

    /// `POST /auth/login`: exchange credentials for a token.
    fn login(&self, credentials: &Credentials)
    -> impl Future<Output = StoreResult<String>> + Send;

    /// `POST /users`: create an account.
    fn register(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = StoreResult<CreatedAccount>> + Send;
}
