use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Forward terminal events from a blocking reader thread.
///
/// Inputs:
/// - `event_tx`: Destination for key/resize events
/// - `cancelled`: Set to stop the thread
///
/// Details:
/// - Polls every 50ms so cancellation is noticed promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                // no event, or a transient poll error: check the flag again
                Ok(false) | Err(_) => {}
            }
        }
    });
}
