//! Session state machine driven through the real client.

use std::time::Duration;

use storefront::logic::{attempt_login, logout, require_auth};
use storefront::sources::{Credentials, HttpStore, INVALID_CREDENTIALS_MSG};
use storefront::state::{AuthStatus, Session};

use super::stub;

#[tokio::test]
/// What: Valid login authenticates; logout returns to unauthenticated
///
/// - Input: johnd / m38rmF$ against a service answering {"token":"abc"}
/// - Output: Authenticated with "abc"; after logout no token
async fn login_then_logout() {
    let srv = stub::spawn().await;
    let api = HttpStore::new(srv.base_url(), Duration::from_secs(5)).expect("client");
    let session = Session::new();
    assert_eq!(session.status(), AuthStatus::Unauthenticated);

    let token = attempt_login(&api, &session, &Credentials::new(stub::USERNAME, stub::PASSWORD))
        .await
        .expect("login");
    assert_eq!(token, "abc");
    assert_eq!(session.status(), AuthStatus::Authenticated);
    assert_eq!(require_auth(&session).as_deref(), Ok("abc"));

    logout(&session);
    assert_eq!(session.status(), AuthStatus::Unauthenticated);
    assert_eq!(session.token(), None);
}

#[tokio::test]
/// What: 401 leaves the session unauthenticated with the inline message
///
/// - Input: bad / bad
/// - Output: INVALID_CREDENTIALS_MSG; still unauthenticated
async fn bad_credentials_keep_state() {
    let srv = stub::spawn().await;
    let api = HttpStore::new(srv.base_url(), Duration::from_secs(5)).expect("client");
    let session = Session::new();
    let err = attempt_login(&api, &session, &Credentials::new("bad", "bad"))
        .await
        .expect_err("rejected");
    assert_eq!(err.user_message(), INVALID_CREDENTIALS_MSG);
    assert!(!session.is_authenticated());
}

#[tokio::test]
/// What: Clones of a session observe the same login
///
/// - Input: Login through one clone
/// - Output: Other clone reports the token
async fn session_clones_share_state() {
    let srv = stub::spawn().await;
    let api = HttpStore::new(srv.base_url(), Duration::from_secs(5)).expect("client");
    let session = Session::new();
    let observer = session.clone();
    attempt_login(&api, &session, &Credentials::new(stub::USERNAME, stub::PASSWORD))
        .await
        .expect("login");
    assert_eq!(observer.token().as_deref(), Some(stub::TOKEN));
}
