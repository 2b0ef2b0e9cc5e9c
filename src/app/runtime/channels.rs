use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers::{spawn_catalog_worker, spawn_detail_worker, spawn_login_worker};
use crate::events::Requests;
use crate::sources::StoreApi;
use crate::state::{DetailResponse, Product, Session};

/// What: Channel ends the event loop owns.
///
/// Details:
/// - Request receivers are moved into the workers at construction; the loop
///   keeps the senders (bundled as [`Requests`]) and the result receivers.
pub struct Channels {
    /// Terminal event sender handed to the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Stops the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Catalog load outcome (sent once).
    pub catalog_rx: mpsc::UnboundedReceiver<Result<Vec<Product>, String>>,
    /// Product detail responses tagged with their request sequence.
    pub detail_res_rx: mpsc::UnboundedReceiver<DetailResponse>,
    /// Login outcomes: token or inline error text.
    pub login_res_rx: mpsc::UnboundedReceiver<Result<String, String>>,
    /// Request senders used by key handlers.
    pub requests: Requests,
}

impl Channels {
    /// What: Create all channels and start the store workers.
    ///
    /// Inputs:
    /// - `api`: Store service shared by the workers
    /// - `session`: Session handle the login worker writes
    ///
    /// Output: Loop-side channel ends.
    ///
    /// Details:
    /// - The catalog worker starts fetching immediately.
    pub fn new<A: StoreApi + 'static>(api: &Arc<A>, session: Session) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel();
        let (detail_req_tx, detail_req_rx) = mpsc::unbounded_channel();
        let (detail_res_tx, detail_res_rx) = mpsc::unbounded_channel();
        let (login_req_tx, login_req_rx) = mpsc::unbounded_channel();
        let (login_res_tx, login_res_rx) = mpsc::unbounded_channel();

        spawn_catalog_worker(Arc::clone(api), catalog_tx);
        spawn_detail_worker(Arc::clone(api), detail_req_rx, detail_res_tx);
        spawn_login_worker(Arc::clone(api), session, login_req_rx, login_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            catalog_rx,
            detail_res_rx,
            login_res_rx,
            requests: Requests {
                detail_tx: detail_req_tx,
                login_tx: login_req_tx,
            },
        }
    }
}
