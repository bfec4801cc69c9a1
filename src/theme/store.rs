use ratatui::style::Color;

use super::types::Theme;

/// Catppuccin Mocha palette.
const DEFAULT_THEME: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    mantle: Color::Rgb(24, 24, 37),      // #181825
    crust: Color::Rgb(17, 17, 27),       // #11111b
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext1: Color::Rgb(186, 194, 222), // #bac2de
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    green: Color::Rgb(166, 227, 161),    // #a6e3a1
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
    lavender: Color::Rgb(180, 190, 254), // #b4befe
};

/// Return the application's theme palette.
#[must_use]
pub const fn theme() -> Theme {
    DEFAULT_THEME
}
