//! Event handling layer for the terminal storefront.
//!
//! [`handle_event`] routes a key press to the open modal, the detail pane, or
//! the catalog, after the global Ctrl shortcuts.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::sources::Credentials;
use crate::state::{AppState, DetailRequest};

mod catalog;
mod detail;
mod global;
mod modals;

/// Request senders the key handlers use to reach background workers.
pub struct Requests {
    /// Product detail fetches.
    pub detail_tx: mpsc::UnboundedSender<DetailRequest>,
    /// Login submissions.
    pub login_tx: mpsc::UnboundedSender<Credentials>,
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, requests: &Requests) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if is_ctrl(&ke, 'c') {
        return true;
    }
    if global::handle_global_key(ke, app) {
        return false;
    }
    if !app.modal.is_none() {
        modals::handle_modal_key(ke, app, requests);
        return false;
    }
    if app.detail.is_open() {
        detail::handle_detail_key(ke, app);
        return false;
    }
    catalog::handle_catalog_key(ke, app, requests);
    false
}

/// Whether `ke` is Ctrl + `ch`.
fn is_ctrl(ke: &KeyEvent, ch: char) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use tokio::sync::mpsc;

    use super::Requests;
    use crate::config::Settings;
    use crate::logic::detail_rng;
    use crate::sources::Credentials;
    use crate::state::{AppState, DetailRequest, Product, Rating, Session};

    pub fn key(code: KeyCode) -> CEvent {
        let mut ke = KeyEvent::new(code, KeyModifiers::empty());
        ke.kind = KeyEventKind::Press;
        CEvent::Key(ke)
    }

    pub fn ctrl(ch: char) -> CEvent {
        let mut ke = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
        ke.kind = KeyEventKind::Press;
        CEvent::Key(ke)
    }

    pub struct Harness {
        pub app: AppState,
        pub requests: Requests,
        pub detail_rx: mpsc::UnboundedReceiver<DetailRequest>,
        pub login_rx: mpsc::UnboundedReceiver<Credentials>,
        pub _dir: tempfile::TempDir,
    }

    pub fn harness() -> Harness {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = AppState::new(
            &Settings {
                page_size: 2,
                ..Settings::default()
            },
            Session::new(),
            dir.path().join("session.json"),
            detail_rng(Some(7)),
        );
        let products = (1..=5)
            .map(|id| Product {
                id,
                title: format!("Item {id}"),
                price: 10.0 * f64::from(u32::try_from(id).unwrap_or(0)),
                description: String::new(),
                category: if id % 2 == 0 { "even" } else { "odd" }.to_string(),
                image: String::new(),
                rating: Rating {
                    rate: 3.0,
                    count: u32::try_from(id).unwrap_or(0),
                },
            })
            .collect();
        app.finish_catalog_load(Ok(products));
        let (detail_tx, detail_rx) = mpsc::unbounded_channel();
        let (login_tx, login_rx) = mpsc::unbounded_channel();
        Harness {
            app,
            requests: Requests {
                detail_tx,
                login_tx,
            },
            detail_rx,
            login_rx,
            _dir: dir,
        }
    }

    impl Harness {
        pub fn press(&mut self, ev: CEvent) -> bool {
            super::handle_event(ev, &mut self.app, &self.requests)
        }
    }
}
