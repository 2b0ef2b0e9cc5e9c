use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Settings;
use crate::logic::detail_rng;
use crate::sources::StoreApi;
use crate::state::{AppState, DetailResponse, Session};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod handlers;
mod workers;

use background::spawn_event_thread;
use channels::Channels;
use handlers::handle_login_result;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the terminal storefront until the user quits.
///
/// Inputs:
/// - `api`: Store service
/// - `settings`: Loaded settings
/// - `session`: Session handle (possibly restored from disk)
/// - `session_path`: Token file location
/// - `seed`: Fixed shuffle seed for detail panels, if any
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` on terminal setup or draw failures.
///
/// Details:
/// - Spawns the catalog, detail and login workers plus the terminal event thread.
/// - Restores the terminal before returning, also on error.
pub async fn run<A: StoreApi + 'static>(
    api: A,
    settings: &Settings,
    session: Session,
    session_path: PathBuf,
    seed: Option<u64>,
) -> Result<()> {
    setup_terminal()?;
    let outcome = event_loop(api, settings, session, session_path, seed).await;
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "[Runtime] Failed to restore terminal");
    }
    outcome
}

async fn event_loop<A: StoreApi + 'static>(
    api: A,
    settings: &Settings,
    session: Session,
    session_path: PathBuf,
    seed: Option<u64>,
) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut app = AppState::new(settings, session.clone(), session_path, detail_rng(seed));
    let api = Arc::new(api);
    let mut channels = Channels::new(&api, session);
    spawn_event_thread(
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );
    tracing::info!("[Runtime] Event loop started");

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.requests) {
                    break;
                }
            }
            Some(result) = channels.catalog_rx.recv() => {
                app.finish_catalog_load(result);
            }
            Some(DetailResponse { seq, result }) = channels.detail_res_rx.recv() => {
                app.finish_detail(seq, result);
            }
            Some(result) = channels.login_res_rx.recv() => {
                handle_login_result(&mut app, result);
            }
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    tracing::info!("[Runtime] Event loop finished");
    Ok(())
}
