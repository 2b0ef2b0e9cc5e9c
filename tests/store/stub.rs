//! In-process FakeStore-compatible service for integration tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

/// Token issued for the accepted account.
pub const TOKEN: &str = "abc";
/// Username the stub accepts.
pub const USERNAME: &str = "johnd";
/// Password the stub accepts.
pub const PASSWORD: &str = "m38rmF$";
/// Product id answered with 200 and an empty body.
pub const EMPTY_ID: u64 = 99;
/// Product id answered with 404.
pub const MISSING_ID: u64 = 404;

#[derive(Clone, Default)]
struct StubState {
    logins: Arc<Mutex<Vec<Value>>>,
}

/// Running stub; the server task stops when the handle is dropped.
pub struct StoreStub {
    base_url: String,
    join: JoinHandle<()>,
    logins: Arc<Mutex<Vec<Value>>>,
}

impl StoreStub {
    /// Base URL to point `HttpStore` at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Login request bodies received so far.
    pub fn logins(&self) -> Vec<Value> {
        self.logins.lock().map_or_else(|_| Vec::new(), |v| v.clone())
    }
}

impl Drop for StoreStub {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Fixture catalog: five products across two categories.
pub fn products() -> Value {
    json!([
        {"id": 1, "title": "Fjallraven Backpack", "price": 109.95, "description": "Bag",
         "category": "men's clothing", "image": "https://img/1.jpg",
         "rating": {"rate": 3.9, "count": 120}},
        {"id": 2, "title": "Slim Fit T-Shirt", "price": 22.3, "description": "Shirt",
         "category": "men's clothing", "image": "https://img/2.jpg",
         "rating": {"rate": 4.1, "count": 259}},
        {"id": 3, "title": "Gold Bracelet", "price": 695.0, "description": "Chain",
         "category": "jewelery", "image": "https://img/3.jpg",
         "rating": {"rate": 4.6, "count": 400}},
        {"id": 4, "title": "Silver Ring", "price": 9.99, "description": "Ring",
         "category": "jewelery", "image": "https://img/4.jpg",
         "rating": {"rate": 3.0, "count": 400}},
        {"id": 5, "title": "Cotton Jacket", "price": 55.99, "description": "Jacket",
         "category": "men's clothing", "image": "https://img/5.jpg",
         "rating": {"rate": 4.7, "count": 500}}
    ])
}

async fn list_products() -> Json<Value> {
    Json(products())
}

async fn get_product(Path(id): Path<u64>) -> Response {
    if id == MISSING_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    if id == EMPTY_ID {
        return (StatusCode::OK, "").into_response();
    }
    let all = products();
    all.as_array()
        .and_then(|items| items.iter().find(|p| p["id"] == id).cloned())
        .map_or_else(
            || (StatusCode::OK, "").into_response(),
            |p| Json(p).into_response(),
        )
}

async fn login(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    if let Ok(mut seen) = state.logins.lock() {
        seen.push(body.clone());
    }
    if body["username"] == USERNAME && body["password"] == PASSWORD {
        Json(json!({ "token": TOKEN })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "username or password is incorrect").into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == USERNAME {
        (StatusCode::BAD_REQUEST, "username taken").into_response()
    } else {
        Json(json!({ "id": 11 })).into_response()
    }
}

/// What: Start the stub on an ephemeral local port.
///
/// Output: Handle carrying the base URL.
pub async fn spawn() -> StoreStub {
    let state = StubState::default();
    let logins = Arc::clone(&state.logins);
    let app = Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/auth/login", post(login))
        .route("/users", post(register))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    StoreStub {
        base_url: format!("http://{addr}"),
        join,
        logins,
    }
}
