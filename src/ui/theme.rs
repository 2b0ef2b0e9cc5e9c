use ratatui::style::Color;

/// Palette used by rendering code.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Panel background.
    pub mantle: Color,
    /// Borders and separators.
    pub overlay1: Color,
    /// Low-emphasis text.
    pub subtext0: Color,
    /// Primary text.
    pub text: Color,
    /// Selection and interactive highlights.
    pub sapphire: Color,
    /// Headings.
    pub mauve: Color,
    /// Prices and success messages.
    pub green: Color,
    /// Stars.
    pub yellow: Color,
    /// Errors.
    pub red: Color,
}

/// Dark palette the UI draws with.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(30, 30, 46),       // #1e1e2e
        mantle: Color::Rgb(24, 24, 37),     // #181825
        overlay1: Color::Rgb(127, 132, 156), // #7f849c
        subtext0: Color::Rgb(166, 173, 200), // #a6adc8
        text: Color::Rgb(205, 214, 244),    // #cdd6f4
        sapphire: Color::Rgb(116, 199, 236), // #74c7ec
        mauve: Color::Rgb(203, 166, 247),   // #cba6f7
        green: Color::Rgb(166, 227, 161),   // #a6e3a1
        yellow: Color::Rgb(249, 226, 175),  // #f9e2af
        red: Color::Rgb(243, 139, 168),     // #f38ba8
    }
}
