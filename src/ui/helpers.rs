use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

use super::theme::theme;

/// What: Rectangle of `width` × `height` centred in `area`, clamped to fit.
///
/// Inputs:
/// - `area`: Containing rectangle
/// - `width`, `height`: Desired size
///
/// Output: Centred rectangle no larger than `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Rounded panel block with a title.
#[must_use]
pub fn panel(title: &str) -> Block<'_> {
    let th = theme();
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().fg(th.text).bg(th.mantle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centering clamps oversize requests
    ///
    /// - Input: 100×40 area; 50×10 box and 200×80 box
    /// - Output: Centred box; oversize box equals the area
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 50, 10), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_rect(area, 200, 80), area);
    }
}
