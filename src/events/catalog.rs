use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Requests;
use crate::state::{AppState, DetailRequest};

/// What: Keys on the catalog view.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Application state
/// - `requests`: Worker senders (Enter opens the detail pane)
///
/// Details:
/// - Printable characters edit the search text; every filter change returns
///   to page 1.
pub(super) fn handle_catalog_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    match ke.code {
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => app.push_search(ch),
        KeyCode::Backspace => app.pop_search(),
        KeyCode::Esc => {
            if !app.filter.search.is_empty() {
                app.filter.search.clear();
                app.filters_changed();
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp | KeyCode::Left => app.change_page(-1),
        KeyCode::PageDown | KeyCode::Right => app.change_page(1),
        KeyCode::Tab => app.cycle_category(true),
        KeyCode::BackTab => app.cycle_category(false),
        KeyCode::F(2) => app.cycle_sort(),
        KeyCode::F(3) => app.cycle_min_rating(),
        KeyCode::F(4) => app.adjust_price_max(false),
        KeyCode::F(5) => app.adjust_price_max(true),
        KeyCode::Enter => open_selected(app, requests),
        _ => {}
    }
}

fn open_selected(app: &mut AppState, requests: &Requests) {
    let Some(product) = app.selected_product() else {
        return;
    };
    let seq = app.open_detail(product.id);
    tracing::debug!(seq, id = product.id, "[Events] Opening product detail");
    if requests
        .detail_tx
        .send(DetailRequest {
            seq,
            product_id: product.id,
        })
        .is_err()
    {
        app.finish_detail(seq, Err("Failed to fetch product".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::events::test_support::{harness, key};
    use crate::state::{DetailView, SortKey};

    #[test]
    /// What: Filter keys update the filter state and reset paging
    ///
    /// - Input: PageDown, F2, F3, Tab
    /// - Output: page 2 then back to 1; sort PriceAsc; min rating 1; category "odd"
    fn filter_keys() {
        let mut h = harness();
        h.press(key(KeyCode::PageDown));
        assert_eq!(h.app.filter.page, 2);
        h.press(key(KeyCode::F(2)));
        assert_eq!(h.app.filter.page, 1);
        assert_eq!(h.app.filter.sort, SortKey::PriceAsc);
        h.press(key(KeyCode::F(3)));
        assert_eq!(h.app.filter.min_rating, 1);
        h.press(key(KeyCode::Tab));
        assert_eq!(h.app.filter.category.as_deref(), Some("odd"));
    }

    #[test]
    /// What: Enter on a row sends a tagged detail request
    ///
    /// - Input: Down, Enter with popularity sort (ids 5,4 on page 1)
    /// - Output: Request for product 4 with the current sequence id; pane loading
    fn enter_requests_detail() {
        let mut h = harness();
        h.press(key(KeyCode::Down));
        h.press(key(KeyCode::Enter));
        let req = h.detail_rx.try_recv().expect("detail request");
        assert_eq!(req.product_id, 4);
        assert!(h.app.detail_seq.is_current(req.seq));
        assert!(matches!(h.app.detail, DetailView::Loading { product_id: 4 }));
        h.press(key(KeyCode::Esc));
        assert!(!h.app.detail.is_open());
    }

    #[test]
    /// What: Typing filters by title
    ///
    /// - Input: "item 3"
    /// - Output: One match
    fn typing_searches() {
        let mut h = harness();
        for c in "item 3".chars() {
            h.press(key(KeyCode::Char(c)));
        }
        assert_eq!(h.app.current_page().map(|p| p.filtered_count), Some(1));
        h.press(key(KeyCode::Esc));
        assert!(h.app.filter.search.is_empty());
    }

    #[test]
    /// What: Clearing the search returns to page 1 and the first row
    ///
    /// - Input: Search "item", PageDown, Down, then Esc
    /// - Output: Search empty, page 1, cursor on row 0
    fn esc_clears_search_and_resets_cursor() {
        let mut h = harness();
        for c in "item".chars() {
            h.press(key(KeyCode::Char(c)));
        }
        h.press(key(KeyCode::PageDown));
        h.press(key(KeyCode::Down));
        assert_eq!(h.app.filter.page, 2);
        assert_eq!(h.app.selected, 1);
        h.press(key(KeyCode::Esc));
        assert!(h.app.filter.search.is_empty());
        assert_eq!(h.app.filter.page, 1);
        assert_eq!(h.app.selected, 0);
        assert_eq!(h.app.list_state.selected(), Some(0));
    }
}
