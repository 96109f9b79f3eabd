//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    // History navigation
    pub next: &'static str,
    pub prev: &'static str,
    pub generate: &'static str,

    // Screens
    pub palette: &'static str,
    pub shades: &'static str,
    pub export: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,

    // Separators
    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            next: "\u{f051}",           // nf-fa-step_forward
            prev: "\u{f048}",           // nf-fa-step_backward
            generate: "\u{f074}",       // nf-fa-random

            palette: "\u{f1fc}",        // nf-fa-paint_brush
            shades: "\u{f0c9}",         // nf-fa-bars
            export: "\u{f121}",         // nf-fa-code
            help: "\u{f059}",           // nf-fa-question_circle

            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times
            info: "\u{f05a}",           // nf-fa-info_circle

            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",

            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
