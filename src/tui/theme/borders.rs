//! Border styles

use ratatui::symbols::border;

/// Border style - rounded for panels, thick around the selected swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn selected_set() -> border::Set<'static> {
        border::THICK
    }
}
