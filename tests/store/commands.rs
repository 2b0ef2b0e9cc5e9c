//! One-shot commands end to end: stub service, real client, temp session file.

use std::time::Duration;

use storefront::app::persist::load_session_token;
use storefront::args::{CliContext, CliError, Command, ProductsArgs, run_command};
use storefront::config::Settings;
use storefront::sources::HttpStore;
use storefront::state::{Session, SortKey};

use super::stub;

fn context(base: &str, dir: &tempfile::TempDir, session: Session) -> CliContext<HttpStore> {
    CliContext {
        api: HttpStore::new(base, Duration::from_secs(5)).expect("client"),
        settings: Settings::default(),
        session,
        session_path: dir.path().join("session.json"),
        seed: Some(7),
    }
}

#[tokio::test]
/// What: `products` lists a filtered, sorted page
///
/// - Input: Default filters; then category "jewelery" sorted by price ascending
/// - Output: All five products on page 1; then Silver Ring before Gold Bracelet
async fn products_command_filters_and_sorts() {
    let srv = stub::spawn().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(srv.base_url(), &dir, Session::new());

    let all = run_command(&Command::Products(ProductsArgs::default()), &ctx)
        .await
        .expect("listing");
    assert!(all.contains("Page 1 of 1 · 5 products"), "{all}");

    let args = ProductsArgs {
        category: Some("jewelery".into()),
        sort: Some(SortKey::PriceAsc),
        page: 1,
        ..ProductsArgs::default()
    };
    let out = run_command(&Command::Products(args), &ctx).await.expect("listing");
    let ring = out.find("Silver Ring").expect("ring listed");
    let bracelet = out.find("Gold Bracelet").expect("bracelet listed");
    assert!(ring < bracelet);
    assert!(!out.contains("Backpack"));
    assert!(out.contains("Page 1 of 1 · 2 products"));
}

#[tokio::test]
/// What: Page past the end is reported, not an error
///
/// - Input: `products --page 5` on a one-page catalog
/// - Output: "No products on page 5 (last page is 1)."
async fn products_command_past_end() {
    let srv = stub::spawn().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(srv.base_url(), &dir, Session::new());
    let args = ProductsArgs {
        page: 5,
        ..ProductsArgs::default()
    };
    let out = run_command(&Command::Products(args), &ctx).await.expect("ok");
    assert_eq!(out, "No products on page 5 (last page is 1).\n");
}

#[tokio::test]
/// What: `categories` and `product` commands
///
/// - Input: categories; product 3; product 99
/// - Output: "All" first; detail with related Silver Ring; NotFound message for 99
async fn categories_and_product_detail() {
    let srv = stub::spawn().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(srv.base_url(), &dir, Session::new());

    let cats = run_command(&Command::Categories, &ctx).await.expect("categories");
    assert_eq!(cats, "All\nmen's clothing\njewelery\n");

    let detail = run_command(&Command::Product { id: 3 }, &ctx).await.expect("detail");
    assert!(detail.starts_with("Gold Bracelet (#3)\n"));
    let related = detail.find("Related products:").expect("related section");
    let popular = detail.find("Popular this week:").expect("popular section");
    assert!(detail[related..popular].contains("Silver Ring"));
    assert!(!detail[related..popular].contains("Backpack"));

    let err = run_command(&Command::Product { id: stub::EMPTY_ID }, &ctx)
        .await
        .expect_err("missing");
    assert_eq!(err.to_string(), "Product 99 not found");
}

#[tokio::test]
/// What: login, profile and logout persist and clear the session file
///
/// - Input: profile while signed out; login johnd; profile; logout
/// - Output: Unauthorized; token "abc" saved; profile shows it; file cleared
async fn login_profile_logout_round() {
    let srv = stub::spawn().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(srv.base_url(), &dir, Session::new());

    let gated = run_command(&Command::Profile, &ctx).await.expect_err("gated");
    assert!(matches!(gated, CliError::Unauthorized(_)));

    let login = Command::Login {
        username: stub::USERNAME.into(),
        password: Some(stub::PASSWORD.into()),
    };
    assert_eq!(
        run_command(&login, &ctx).await.expect("login"),
        "Login successful!\n"
    );
    assert_eq!(load_session_token(&ctx.session_path).as_deref(), Some(stub::TOKEN));

    let profile = run_command(&Command::Profile, &ctx).await.expect("profile");
    assert!(profile.contains("Session: abc"));

    assert_eq!(
        run_command(&Command::Logout, &ctx).await.expect("logout"),
        "Logged out.\n"
    );
    assert_eq!(load_session_token(&ctx.session_path), None);
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
/// What: Rejected login leaves no session file behind
///
/// - Input: login bad/bad
/// - Output: Inline invalid-credentials message; nothing persisted
async fn rejected_login_persists_nothing() {
    let srv = stub::spawn().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = context(srv.base_url(), &dir, Session::new());
    let login = Command::Login {
        username: "bad".into(),
        password: Some("bad".into()),
    };
    let err = run_command(&login, &ctx).await.expect_err("rejected");
    assert_eq!(err.to_string(), storefront::sources::INVALID_CREDENTIALS_MSG);
    assert!(!ctx.session_path.exists());
}
