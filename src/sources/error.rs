use std::fmt;

/// Remote operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /products`
    Products,
    /// `GET /products/{id}`
    Product(u64),
    /// `POST /auth/login`
    Login,
    /// `POST /users`
    Register,
}

impl Endpoint {
    /// What: Request path relative to the API base URL.
    ///
    /// Inputs: None
    ///
    /// Output: Path starting with `/`.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            Self::Product(id) => format!("/products/{id}"),
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/users".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Failure talking to the store API.
///
/// Every variant is terminal for the action that triggered it; callers show
/// [`StoreError::user_message`] and wait for the user to try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Connection, TLS or timeout failure before a response arrived.
    Network {
        /// Operation that failed.
        endpoint: Endpoint,
        /// Transport error text.
        message: String,
    },
    /// Non-2xx response on a read endpoint.
    Status {
        /// Operation that failed.
        endpoint: Endpoint,
        /// HTTP status code.
        status: u16,
    },
    /// Response body was not the expected JSON.
    Decode {
        /// Operation that failed.
        endpoint: Endpoint,
        /// Parser error text.
        message: String,
    },
    /// Product lookup answered without a product.
    NotFound {
        /// Requested product id.
        id: u64,
    },
    /// Login rejected (any non-2xx from `/auth/login`).
    InvalidCredentials {
        /// HTTP status code.
        status: u16,
    },
    /// Account creation rejected (any non-2xx from `/users`).
    RegistrationRejected {
        /// HTTP status code.
        status: u16,
    },
}

/// Inline message for a rejected login.
pub const INVALID_CREDENTIALS_MSG: &str = "Invalid username or password.";
/// Inline message for a rejected registration.
pub const REGISTRATION_FAILED_MSG: &str =
    "Could not create account. The API might be down or username might be taken.";

impl StoreError {
    /// Operation this error belongs to.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
            Self::NotFound { id } => Endpoint::Product(*id),
            Self::InvalidCredentials { .. } => Endpoint::Login,
            Self::RegistrationRejected { .. } => Endpoint::Register,
        }
    }

    /// What: Message shown to the user for this failure.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - Page-level text for catalog/product fetches, inline text for login and
    ///   registration.
    ///
    /// Details:
    /// - A rejection on login/registration gets the specific message; transport
    ///   and decode failures there get a generic one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match (self, self.endpoint()) {
            (Self::NotFound { id }, _) => format!("Product {id} not found"),
            (Self::InvalidCredentials { .. }, _) => INVALID_CREDENTIALS_MSG.to_string(),
            (Self::RegistrationRejected { .. }, _) => REGISTRATION_FAILED_MSG.to_string(),
            (_, Endpoint::Products) => "Failed to fetch products".to_string(),
            (_, Endpoint::Product(_)) => "Failed to fetch product".to_string(),
            (_, Endpoint::Login) => "Failed to login.".to_string(),
            (_, Endpoint::Register) => "Registration failed.".to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { endpoint, message } => {
                write!(f, "network error on {endpoint}: {message}")
            }
            Self::Status { endpoint, status } => {
                write!(f, "{endpoint} answered HTTP {status}")
            }
            Self::Decode { endpoint, message } => {
                write!(f, "unexpected response from {endpoint}: {message}")
            }
            Self::NotFound { id } => write!(f, "product {id} not found"),
            Self::InvalidCredentials { status } => {
                write!(f, "login rejected with HTTP {status}")
            }
            Self::RegistrationRejected { status } => {
                write!(f, "registration rejected with HTTP {status}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
