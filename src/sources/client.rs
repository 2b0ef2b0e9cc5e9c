use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{CreatedAccount, Credentials, Endpoint, NewAccount, StoreApi, StoreError, StoreResult};
use crate::state::Product;

/// Public FakeStore-compatible service.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    /// Opaque session token.
    token: String,
}

/// Store API over HTTP.
///
/// Cloning is cheap; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct HttpStore {
    /// Pooled HTTP client carrying the request timeout.
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl HttpStore {
    /// What: Create a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Service root, e.g. `https://fakestoreapi.com`; a trailing `/` is dropped
    /// - `timeout`: Whole-request timeout
    ///
    /// Output: Ready client.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend cannot be initialised
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("storefront/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// What: Send a request and read the whole body.
    ///
    /// Inputs:
    /// - `endpoint`: Operation, used for error tagging
    /// - `request`: Prepared request
    ///
    /// Output: `(status, body)` for any status; only transport failures are `Err`.
    async fn send(
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> StoreResult<(reqwest::StatusCode, String)> {
        let network = |e: reqwest::Error| StoreError::Network {
            endpoint,
            message: e.to_string(),
        };
        let response = request.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(
            endpoint = %endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            "[Store] Response"
        );
        Ok((status, body))
    }
}

/// Parse `body` as JSON, tagging failures with `endpoint`.
fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> StoreResult<T> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

/// The service answers an unknown product id with 200 and an empty (or `null`) body.
fn is_empty_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "null"
}

impl StoreApi for HttpStore {
    async fn fetch_products(&self) -> StoreResult<Vec<Product>> {
        let endpoint = Endpoint::Products;
        let (status, body) = Self::send(endpoint, self.client.get(self.url(endpoint))).await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "[Store] Product list request failed");
            return Err(StoreError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        let products: Vec<Product> = decode(endpoint, &body)?;
        tracing::info!(count = products.len(), "[Store] Loaded product list");
        Ok(products)
    }

    async fn fetch_product(&self, id: u64) -> StoreResult<Product> {
        let endpoint = Endpoint::Product(id);
        let (status, body) = Self::send(endpoint, self.client.get(self.url(endpoint))).await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound { id });
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        if is_empty_body(&body) {
            tracing::info!(id, "[Store] Product lookup returned no product");
            return Err(StoreError::NotFound { id });
        }
        decode(endpoint, &body)
    }

    async fn login(&self, credentials: &Credentials) -> StoreResult<String> {
        let endpoint = Endpoint::Login;
        let payload = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password.as_str(),
        });
        let request = self.client.post(self.url(endpoint)).json(&payload);
        let (status, body) = Self::send(endpoint, request).await?;
        if !status.is_success() {
            tracing::info!(
                username = %credentials.username,
                status = status.as_u16(),
                "[Store] Login rejected"
            );
            return Err(StoreError::InvalidCredentials {
                status: status.as_u16(),
            });
        }
        let LoginResponse { token } = decode(endpoint, &body)?;
        Ok(token)
    }

    async fn register(&self, account: &NewAccount) -> StoreResult<CreatedAccount> {
        let endpoint = Endpoint::Register;
        let payload = serde_json::json!({
            "email": account.email,
            "username": account.username,
            "password": account.password.as_str(),
            "name": account.name,
        });
        let request = self.client.post(self.url(endpoint)).json(&payload);
        let (status, body) = Self::send(endpoint, request).await?;
        if !status.is_success() {
            tracing::info!(
                username = %account.username,
                status = status.as_u16(),
                "[Store] Registration rejected"
            );
            return Err(StoreError::RegistrationRejected {
                status: status.as_u16(),
            });
        }
        if is_empty_body(&body) {
            return Ok(CreatedAccount::default());
        }
        decode(endpoint, &body)
    }
}
