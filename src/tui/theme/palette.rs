//! Interface colors - Monochrome grayscale chrome around the swatches

use crate::color::Color as Swatch;
use ratatui::style::Color;

/// Monochrome grayscale palette
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub error: Color,
    /// Text drawn on top of a light swatch
    pub on_light: Color,
    /// Text drawn on top of a dark swatch
    pub on_dark: Color,
}

impl Palette {
    /// Monochrome palette - pure black, white, and grays
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),          // #000000 pure black
        bg_secondary: Color::Rgb(18, 18, 18),    // #121212 near black
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff white
        fg_secondary: Color::Rgb(136, 136, 136), // #888888 medium gray
        accent: Color::Rgb(255, 255, 255),       // #ffffff white (accent = white)
        accent_alt: Color::Rgb(200, 200, 200),   // #c8c8c8 light gray
        border: Color::Rgb(64, 64, 64),          // #404040 dark gray
        error: Color::Rgb(255, 255, 255),        // #ffffff white (errors still visible via icon)
        on_light: Color::Rgb(31, 41, 55),        // #1f2937 slate
        on_dark: Color::Rgb(255, 255, 255),      // #ffffff white
    };

    /// Legible text color for a swatch background
    pub fn text_on(&self, dark_background: bool) -> Color {
        if dark_background { self.on_dark } else { self.on_light }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}

/// Terminal color for a swatch
pub fn swatch(color: Swatch) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
