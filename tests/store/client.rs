//! `HttpStore` against the stub: decoding, status mapping and empty bodies.

use std::time::Duration;

use storefront::sources::{
    Credentials, Endpoint, HttpStore, NewAccount, PersonName, StoreApi, StoreError,
};
use zeroize::Zeroizing;

use super::stub;

fn store(base: &str) -> HttpStore {
    HttpStore::new(base, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
/// What: Product list decodes in service order
///
/// - Input: GET /products on the stub
/// - Output: Five products, ids 1..=5, nested rating decoded
async fn fetch_products_decodes_catalog() {
    let srv = stub::spawn().await;
    let products = store(srv.base_url()).fetch_products().await.expect("products");
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(products[2].rating.count, 400);
    assert_eq!(products[2].category, "jewelery");
}

#[tokio::test]
/// What: Single product lookup, including both "unknown id" shapes
///
/// - Input: ids 3, 99 (200 with empty body) and 404 (HTTP 404)
/// - Output: Product 3; NotFound for both unknown ids
async fn fetch_product_maps_unknown_ids() {
    let srv = stub::spawn().await;
    let api = store(srv.base_url());
    assert_eq!(api.fetch_product(3).await.expect("found").title, "Gold Bracelet");
    assert_eq!(
        api.fetch_product(stub::EMPTY_ID).await,
        Err(StoreError::NotFound { id: stub::EMPTY_ID })
    );
    assert_eq!(
        api.fetch_product(stub::MISSING_ID).await,
        Err(StoreError::NotFound { id: stub::MISSING_ID })
    );
}

#[tokio::test]
/// What: Login returns the token and posts username/password as JSON
///
/// - Input: Valid and invalid credentials
/// - Output: "abc"; InvalidCredentials with status 401; stub saw both bodies
async fn login_token_and_rejection() {
    let srv = stub::spawn().await;
    let api = store(srv.base_url());
    let token = api
        .login(&Credentials::new(stub::USERNAME, stub::PASSWORD))
        .await
        .expect("token");
    assert_eq!(token, stub::TOKEN);
    let err = api
        .login(&Credentials::new("bad", "bad"))
        .await
        .expect_err("rejected");
    assert_eq!(err, StoreError::InvalidCredentials { status: 401 });
    let seen = srv.logins();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0]["username"], stub::USERNAME);
    assert_eq!(seen[1]["password"], "bad");
}

#[tokio::test]
/// What: Registration success and rejection
///
/// - Input: New username; taken username
/// - Output: Account id 11; RegistrationRejected with status 400
async fn register_created_and_rejected() {
    let srv = stub::spawn().await;
    let api = store(srv.base_url());
    let account = |username: &str| NewAccount {
        email: "ada@example.com".into(),
        username: username.into(),
        password: Zeroizing::new("secret".into()),
        name: PersonName {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
        },
    };
    assert_eq!(api.register(&account("ada")).await.expect("created").id, Some(11));
    assert_eq!(
        api.register(&account(stub::USERNAME)).await,
        Err(StoreError::RegistrationRejected { status: 400 })
    );
}

#[tokio::test]
/// What: Connection failure is a network error tagged with the endpoint
///
/// - Input: Base URL of a stub that has been shut down
/// - Output: Network error on /products with the catalog page message
async fn unreachable_service_is_network_error() {
    let base = {
        let srv = stub::spawn().await;
        srv.base_url().to_string()
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let err = store(&base).fetch_products().await.expect_err("down");
    assert!(matches!(
        err,
        StoreError::Network {
            endpoint: Endpoint::Products,
            ..
        }
    ));
    assert_eq!(err.user_message(), "Failed to fetch products");
}
