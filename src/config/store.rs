use ratatui::style::Color;

use super::types::Theme;

/// Return the application's theme palette (Catppuccin Mocha).
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        crust: Color::Rgb(0x11, 0x11, 0x1b),
        surface2: Color::Rgb(0x58, 0x5b, 0x70),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        overlay2: Color::Rgb(0x93, 0x99, 0xb2),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        red: Color::Rgb(0xf3, 0x8b, 0xa8),
    }
}
