use crate::color::{Color, Notation};
use crate::history::PaletteHistory;
use crate::palette::{ExportFormat, GeneratorMode, ShadeScale, shade_scale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Palette,
    Shades,
    Help,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Everything the renderer reads. Mutated only by `App`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub history: PaletteHistory,
    pub mode: GeneratorMode,
    /// Selected column in the current palette
    pub selected: usize,
    /// Selected row on the shades screen
    pub shade_selected: usize,
    pub notation: Notation,
    pub export_format: ExportFormat,
    /// A palette change is waiting on the transition timer
    pub changing: bool,
    pub status: String,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(mode: GeneratorMode, notation: Notation, export_format: ExportFormat) -> Self {
        Self {
            screen: Screen::Palette,
            history: PaletteHistory::new(),
            mode,
            selected: 0,
            shade_selected: 5,
            notation,
            export_format,
            changing: false,
            status: String::new(),
            toast: None,
            should_quit: false,
        }
    }

    /// Color under the column cursor
    pub fn selected_color(&self) -> Option<Color> {
        self.history.current()?.get(self.selected)
    }

    /// Shade scale of the selected color
    pub fn selected_scale(&self) -> Option<ShadeScale> {
        self.selected_color().map(shade_scale)
    }

    /// Keep the column cursor inside the current palette
    pub fn clamp_selection(&mut self) {
        let len = self.history.current().map_or(0, |p| p.len());
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Origin, Palette};

    #[test]
    fn test_selection_clamps_to_palette() {
        let mut state = AppState::new(GeneratorMode::Mixed, Notation::Hex, ExportFormat::Css);
        assert!(state.selected_color().is_none());

        state.history.append(Palette {
            colors: vec![Color::BLACK, Color::WHITE],
            origin: Origin::Random,
        });
        state.selected = 4;
        state.clamp_selection();
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_color(), Some(Color::WHITE));
        assert_eq!(state.selected_scale().unwrap().base(), Color::WHITE);
    }
}
