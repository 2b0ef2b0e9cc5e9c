use std::sync::Arc;

use tokio::sync::mpsc;

use crate::logic::attempt_login;
use crate::sources::{Credentials, StoreApi};
use crate::state::{DetailRequest, DetailResponse, Product, Session};

/// What: Fetch the catalog once and report the outcome.
///
/// Inputs:
/// - `api`: Store service
/// - `res_tx`: Receives products or the page-level error message
pub fn spawn_catalog_worker<A: StoreApi + 'static>(
    api: Arc<A>,
    res_tx: mpsc::UnboundedSender<Result<Vec<Product>, String>>,
) {
    tokio::spawn(async move {
        let result = api.fetch_products().await.map_err(|e| {
            tracing::warn!(error = %e, "[Worker] Catalog fetch failed");
            e.user_message()
        });
        let _ = res_tx.send(result);
    });
}

/// What: Serve product detail requests.
///
/// Inputs:
/// - `api`: Store service
/// - `req_rx`: Detail requests tagged with a sequence id
/// - `res_tx`: Responses echoing that id
///
/// Details:
/// - Each request runs in its own task and fetches the product and the catalog
///   concurrently, so responses may arrive out of order; the event loop drops
///   all but the latest.
pub fn spawn_detail_worker<A: StoreApi + 'static>(
    api: Arc<A>,
    mut req_rx: mpsc::UnboundedReceiver<DetailRequest>,
    res_tx: mpsc::UnboundedSender<DetailResponse>,
) {
    tokio::spawn(async move {
        while let Some(DetailRequest { seq, product_id }) = req_rx.recv().await {
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let (product, all) =
                    futures::join!(api.fetch_product(product_id), api.fetch_products());
                let result = match (product, all) {
                    (Ok(product), Ok(all)) => Ok((product, all)),
                    (Err(e), _) | (_, Err(e)) => {
                        tracing::warn!(seq, product_id, error = %e, "[Worker] Detail fetch failed");
                        Err(e.user_message())
                    }
                };
                let _ = res_tx.send(DetailResponse { seq, result });
            });
        }
    });
}

/// What: Serve login submissions one at a time.
///
/// Inputs:
/// - `api`: Store service
/// - `session`: Shared session; set on success
/// - `req_rx`: Submitted credentials
/// - `res_tx`: Token or the inline error message
pub fn spawn_login_worker<A: StoreApi + 'static>(
    api: Arc<A>,
    session: Session,
    mut req_rx: mpsc::UnboundedReceiver<Credentials>,
    res_tx: mpsc::UnboundedSender<Result<String, String>>,
) {
    tokio::spawn(async move {
        while let Some(credentials) = req_rx.recv().await {
            let result = attempt_login(api.as_ref(), &session, &credentials)
                .await
                .map_err(|e| e.user_message());
            let _ = res_tx.send(result);
        }
    });
}
