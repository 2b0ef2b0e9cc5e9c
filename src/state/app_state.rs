//! Central `AppState` container for the terminal storefront.

use std::path::PathBuf;

use rand::rngs::StdRng;
use ratatui::widgets::ListState;

use crate::config::Settings;
use crate::logic::cart::{Quantity, added_to_cart_message};
use crate::logic::{CatalogPage, CatalogView, DetailPanels, RequestSequence, detail_panels};
use crate::state::modal::Modal;
use crate::state::session::Session;
use crate::state::types::{ALL_CATEGORIES, FilterState, Product};

/// Step used by the price ceiling keys.
pub const PRICE_STEP: f64 = 50.0;

/// Product detail pane contents.
#[derive(Debug, Clone, Default)]
pub enum DetailView {
    /// No product open.
    #[default]
    Closed,
    /// Fetch in flight for this product.
    Loading {
        /// Requested product id.
        product_id: u64,
    },
    /// Product and its side panels.
    Loaded {
        /// The product itself.
        product: Box<Product>,
        /// Related, popular and gallery panels.
        panels: DetailPanels,
    },
    /// Fetch failed; page-level message.
    Failed {
        /// User-facing message.
        message: String,
    },
}

impl DetailView {
    /// Whether the detail pane replaces the product list.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Global application state shared by the event, worker, and UI layers.
#[derive(Debug)]
pub struct AppState {
    /// Fetched catalog and its load status.
    pub catalog: CatalogView,
    /// User-controlled filter parameters.
    pub filter: FilterState,
    /// Index into the current page that is highlighted.
    pub selected: usize,
    /// List selection state for the product list.
    pub list_state: ListState,
    /// Detail pane.
    pub detail: DetailView,
    /// Quantity picker on the detail pane.
    pub quantity: Quantity,
    /// Ids for detail requests; only the latest response is applied.
    pub detail_seq: RequestSequence,
    /// Shared session handle.
    pub session: Session,
    /// Where the session token is persisted.
    pub session_path: PathBuf,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// One-line status message shown in the footer.
    pub toast: Option<String>,
    /// Display currency symbol.
    pub currency_symbol: String,
    /// Multiplier from store price to display price.
    pub currency_rate: f64,
    /// Price ceiling the filter started with; the F5 key never goes above it.
    pub price_ceiling_limit: f64,
    /// Shuffle source for detail panels.
    pub rng: StdRng,
}

impl AppState {
    /// What: Build the initial state from settings.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings
    /// - `session`: Shared session (possibly restored)
    /// - `session_path`: Token file location
    /// - `rng`: Shuffle source for detail panels
    ///
    /// Output: State with the catalog loading and default filters applied.
    #[must_use]
    pub fn new(settings: &Settings, session: Session, session_path: PathBuf, rng: StdRng) -> Self {
        let filter = FilterState {
            price: settings.price,
            sort: settings.default_sort,
            ..FilterState::default()
        };
        Self {
            catalog: CatalogView::new(settings.page_size),
            filter,
            selected: 0,
            list_state: ListState::default(),
            detail: DetailView::Closed,
            quantity: Quantity::default(),
            detail_seq: RequestSequence::default(),
            session,
            session_path,
            modal: Modal::None,
            toast: None,
            currency_symbol: settings.currency_symbol.clone(),
            currency_rate: settings.currency_rate,
            price_ceiling_limit: settings.price.max,
            rng,
        }
    }

    /// Current derived page, or `None` while the catalog is not loaded.
    #[must_use]
    pub fn current_page(&self) -> Option<CatalogPage> {
        self.catalog.page(&self.filter)
    }

    /// Product under the cursor on the current page.
    #[must_use]
    pub fn selected_product(&self) -> Option<Product> {
        self.current_page()
            .and_then(|page| page.items.get(self.selected).cloned())
    }

    /// Re-clamp the cursor after the page contents changed.
    pub fn sync_selection(&mut self) {
        let len = self.current_page().map_or(0, |p| p.items.len());
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Move the cursor by `delta` rows within the current page.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.current_page().map_or(0, |p| p.items.len());
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    /// Reset to page 1 and the first row after a filter change.
    pub(crate) fn filters_changed(&mut self) {
        self.filter.page = 1;
        self.selected = 0;
        self.sync_selection();
    }

    /// What: Move `delta` pages, staying within `1..=page_count`.
    ///
    /// Inputs:
    /// - `delta`: Signed page offset
    ///
    /// Output: None (mutates `filter.page`)
    pub fn change_page(&mut self, delta: isize) {
        let last = self.current_page().map_or(1, |p| p.page_count.max(1));
        let target = self.filter.page_or_first().saturating_add_signed(delta);
        self.filter.page = target.clamp(1, last);
        self.selected = 0;
        self.sync_selection();
    }

    /// Append a character to the search text.
    pub fn push_search(&mut self, ch: char) {
        self.filter.search.push(ch);
        self.filters_changed();
    }

    /// Delete the last search character.
    pub fn pop_search(&mut self) {
        if self.filter.search.pop().is_some() {
            self.filters_changed();
        }
    }

    /// What: Step through "All" followed by the catalog categories.
    ///
    /// Inputs:
    /// - `forward`: Direction
    ///
    /// Output: None (selects the neighbouring category, wrapping)
    pub fn cycle_category(&mut self, forward: bool) {
        let cats = self.catalog.categories();
        if cats.is_empty() {
            return;
        }
        let current = self.filter.category.as_deref().unwrap_or(ALL_CATEGORIES);
        let idx = cats.iter().position(|c| c == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % cats.len()
        } else {
            (idx + cats.len() - 1) % cats.len()
        };
        self.filter.select_category(&cats[next]);
        self.selected = 0;
        self.sync_selection();
    }

    /// Cycle the sort key.
    pub fn cycle_sort(&mut self) {
        self.filter.sort = self.filter.sort.next();
        self.filters_changed();
    }

    /// Cycle the minimum rating 0 → 1 → … → 5 → 0.
    pub fn cycle_min_rating(&mut self) {
        self.filter.min_rating = (self.filter.min_rating + 1) % 6;
        self.filters_changed();
    }

    /// What: Lower or raise the price ceiling by [`PRICE_STEP`].
    ///
    /// Inputs:
    /// - `raise`: `true` to raise, `false` to lower
    ///
    /// Output: None; the ceiling stays within `[price.min, price_ceiling_limit]`.
    pub fn adjust_price_max(&mut self, raise: bool) {
        let step = if raise { PRICE_STEP } else { -PRICE_STEP };
        let floor = self.filter.price.min;
        let ceiling = self.price_ceiling_limit.max(floor);
        self.filter.price.max = (self.filter.price.max + step).clamp(floor, ceiling);
        self.filters_changed();
    }

    /// Apply a finished catalog load.
    pub fn finish_catalog_load(&mut self, result: Result<Vec<Product>, String>) {
        self.catalog.finish_load(result);
        self.sync_selection();
    }

    /// What: Mark the detail pane as loading and allocate a request id.
    ///
    /// Inputs:
    /// - `product_id`: Product to open
    ///
    /// Output: Request id to send with the fetch.
    pub fn open_detail(&mut self, product_id: u64) -> u64 {
        self.detail = DetailView::Loading { product_id };
        self.quantity = Quantity::default();
        self.detail_seq.issue()
    }

    /// What: Apply a detail fetch result if it is still current.
    ///
    /// Inputs:
    /// - `seq`: Id the response carries
    /// - `result`: Product with the catalog snapshot, or an error message
    ///
    /// Output: `true` when applied; `false` when dropped as stale.
    pub fn finish_detail(
        &mut self,
        seq: u64,
        result: Result<(Product, Vec<Product>), String>,
    ) -> bool {
        if !self.detail_seq.is_current(seq) || !self.detail.is_open() {
            tracing::debug!(
                seq,
                latest = self.detail_seq.latest(),
                "[Detail] Dropping stale response"
            );
            return false;
        }
        self.detail = match result {
            Ok((product, all)) => {
                let panels = detail_panels(&all, &product, &mut self.rng);
                DetailView::Loaded {
                    product: Box::new(product),
                    panels,
                }
            }
            Err(message) => DetailView::Failed { message },
        };
        true
    }

    /// Close the detail pane; late responses for it are dropped.
    pub fn close_detail(&mut self) {
        self.detail = DetailView::Closed;
        self.detail_seq.issue();
    }

    /// "Add to cart" on the open product; sets the footer message.
    pub fn add_to_cart(&mut self) {
        if let DetailView::Loaded { product, .. } = &self.detail {
            let msg = added_to_cart_message(self.quantity, &product.title);
            tracing::info!(id = product.id, qty = self.quantity.get(), "[Cart] Added");
            self.toast = Some(msg);
        }
    }

    /// Sort key label for the sidebar.
    #[must_use]
    pub const fn sort_label(&self) -> &'static str {
        self.filter.sort.label()
    }
}
