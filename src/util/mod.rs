//! Small formatting helpers shared by the CLI and the terminal UI.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a store price in the display currency.
///
/// Inputs:
/// - `price`: Price in store units
/// - `rate`: Conversion multiplier
/// - `symbol`: Currency symbol prefix
///
/// Output: e.g. `format_price(10.0, 80.0, "₹")` → `"₹800.00"`.
#[must_use]
pub fn format_price(price: f64, rate: f64, symbol: &str) -> String {
    format!("{symbol}{:.2}", price * rate)
}

/// What: Five-character star bar for a rating.
///
/// Inputs:
/// - `filled`: Number of filled stars (values above 5 are capped)
///
/// Output: e.g. `"★★★☆☆"`.
#[must_use]
pub fn star_bar(filled: u8) -> String {
    let filled = usize::from(filled.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// What: Truncate text to a terminal display width.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max_width`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise the longest prefix that fits with a
///   trailing `…`.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Shorten a token for display: first 8 characters and an ellipsis.
#[must_use]
pub fn abbreviate_token(token: &str) -> String {
    let head: String = token.chars().take(8).collect();
    if head.len() < token.len() {
        format!("{head}…")
    } else {
        head
    }
}

/// Local time as `YYYY-MM-DD HH:MM:SS`, used for log lines.
#[must_use]
pub fn now_local_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Price conversion and rounding
    ///
    /// - Input: 10.0 at ×80 "₹"; 0.125 at ×1 "$"
    /// - Output: "₹800.00"; "$0.13" or "$0.12" per float rounding, always two decimals
    fn price_formatting() {
        assert_eq!(format_price(10.0, 80.0, "₹"), "₹800.00");
        assert_eq!(format_price(109.95, 1.0, "$"), "$109.95");
        let cents = format_price(0.125, 1.0, "$");
        assert_eq!(cents.len(), "$0.12".len());
    }

    #[test]
    /// What: Width-aware truncation
    ///
    /// - Input: ASCII and wide CJK strings
    /// - Output: Fits the column budget including the ellipsis
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        let wide = truncate_to_width("日本語テキスト", 6);
        assert_eq!(wide, "日本…");
        assert!(wide.width() <= 6);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    /// What: Star bar and token abbreviation
    ///
    /// - Input: 3 stars, 9 stars; long and short tokens
    /// - Output: "★★★☆☆", capped at five; long token shortened
    fn stars_and_tokens() {
        assert_eq!(star_bar(3), "★★★☆☆");
        assert_eq!(star_bar(9), "★★★★★");
        assert_eq!(abbreviate_token("abc"), "abc");
        assert_eq!(abbreviate_token("eyJhbGciOiJIUzI1NiIs"), "eyJhbGci…");
    }
}
