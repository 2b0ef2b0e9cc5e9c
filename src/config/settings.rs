use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::sources::DEFAULT_BASE_URL;
use crate::state::{PriceRange, SortKey};

/// Commented `settings.toml` written when no settings file exists.
pub const SKELETON_SETTINGS_CONTENT: &str = r#"# storefront settings

# Store API root
base_url = "https://fakestoreapi.com"

# Whole-request timeout in seconds
request_timeout_secs = 10

# Products per catalog page
page_size = 9

# Initial price filter bounds (store currency)
price_min = 0.0
price_max = 1000.0

# Initial sort: popular | price-asc | price-desc
default_sort = "popular"

# Display currency: price * currency_rate, prefixed with currency_symbol
currency_symbol = "₹"
currency_rate = 80.0
"#;

/// User-tunable settings loaded from `settings.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Store API root without trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Products per page; never 0.
    pub page_size: usize,
    /// Initial price filter.
    pub price: PriceRange,
    /// Initial sort key.
    pub default_sort: SortKey,
    /// Display currency symbol.
    pub currency_symbol: String,
    /// Multiplier from store price to display price.
    pub currency_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            page_size: crate::logic::PRODUCTS_PER_PAGE,
            price: PriceRange::default(),
            default_sort: SortKey::default(),
            currency_symbol: "₹".to_string(),
            currency_rate: 80.0,
        }
    }
}

/// Read a TOML number that may be written as an integer or a float.
fn as_f64(v: &toml::Value) -> Option<f64> {
    match v {
        toml::Value::Float(f) => Some(*f),
        #[allow(clippy::cast_precision_loss)]
        toml::Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

impl Settings {
    /// What: Parse settings from TOML text.
    ///
    /// Inputs:
    /// - `content`: `settings.toml` contents
    ///
    /// Output: Settings with every missing or invalid key left at its default.
    ///
    /// Details:
    /// - A file that is not valid TOML yields defaults plus a warning.
    /// - Unknown keys are logged and ignored.
    /// - `page_size = 0` is clamped to 1; inverted price bounds are swapped.
    #[must_use]
    pub fn from_toml_str(content: &str) -> Self {
        let mut out = Self::default();
        let table: toml::Table = match toml::from_str(content) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, "[Config] settings.toml is not valid TOML; using defaults");
                return out;
            }
        };
        for (key, val) in &table {
            let applied = match key.as_str() {
                "base_url" => val.as_str().map(|s| {
                    out.base_url = s.trim().trim_end_matches('/').to_string();
                }),
                "request_timeout_secs" => val
                    .as_integer()
                    .and_then(|n| u64::try_from(n).ok())
                    .filter(|n| *n > 0)
                    .map(|n| out.request_timeout = Duration::from_secs(n)),
                "page_size" => val
                    .as_integer()
                    .and_then(|n| usize::try_from(n).ok())
                    .map(|n| out.page_size = n.max(1)),
                "price_min" => as_f64(val).map(|f| out.price.min = f),
                "price_max" => as_f64(val).map(|f| out.price.max = f),
                "default_sort" | "sort" => val
                    .as_str()
                    .and_then(SortKey::from_config_key)
                    .map(|k| out.default_sort = k),
                "currency_symbol" => val.as_str().map(|s| out.currency_symbol = s.to_string()),
                "currency_rate" => as_f64(val)
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| out.currency_rate = f),
                _ => {
                    tracing::debug!(key = %key, "[Config] Ignoring unknown setting");
                    Some(())
                }
            };
            if applied.is_none() {
                tracing::warn!(key = %key, value = %val, "[Config] Invalid setting; keeping default");
            }
        }
        if out.price.min > out.price.max {
            std::mem::swap(&mut out.price.min, &mut out.price.max);
        }
        out
    }

    /// What: Load settings from `path`, writing the skeleton when the file is missing.
    ///
    /// Inputs:
    /// - `path`: Location of `settings.toml`
    ///
    /// Output: Parsed settings, or defaults when the file cannot be read.
    pub fn load(path: &Path) -> Self {
        if !path.is_file() {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match fs::write(path, SKELETON_SETTINGS_CONTENT) {
                Ok(()) => tracing::info!(path = %path.display(), "[Config] Wrote default settings"),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "[Config] Could not write settings skeleton");
                }
            }
        }
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Could not read settings; using defaults");
                Self::default()
            }
        }
    }
}
