//! Day/night palettes
//!
//! Purely cosmetic: every colour pair is a two-way lookup on `is_night_mode`.

use ratatui::style::{Color, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Text drawn directly on the background
    pub foreground: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub chart_line: Color,
}

const NIGHT: Palette = Palette {
    background: Color::Black,
    foreground: Color::Rgb(229, 231, 235),
    button_bg: Color::Rgb(168, 85, 247), // purple-500
    button_fg: Color::White,
    chart_line: Color::Rgb(0xFF, 0x63, 0x47), // tomato
};

const DAY: Palette = Palette {
    background: Color::Rgb(254, 240, 138), // yellow-200
    foreground: Color::Rgb(31, 41, 55),
    button_bg: Color::Rgb(59, 130, 246), // blue-500
    button_fg: Color::White,
    chart_line: Color::Rgb(0x4B, 0x00, 0x82), // indigo
};

impl Palette {
    pub fn for_mode(is_night_mode: bool) -> &'static Palette {
        if is_night_mode {
            &NIGHT
        } else {
            &DAY
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    pub fn button(&self) -> Style {
        Style::default().bg(self.button_bg).fg(self.button_fg)
    }
}
