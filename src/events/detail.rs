use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// Keys on the product detail pane: quantity, add to cart, close.
pub(super) fn handle_detail_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.quantity.increment(),
        KeyCode::Char('-') | KeyCode::Left => app.quantity.decrement(),
        KeyCode::Char('a') | KeyCode::Enter => app.add_to_cart(),
        _ => {}
    }
}
