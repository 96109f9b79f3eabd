//! Help screen showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the help screen
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Left column - Palette & History
    let left_content = vec![
        section_header("History", &theme),
        keybind("Space", "Generate a new palette", &theme),
        keybind("h / Left", "Previous palette", &theme),
        keybind("l / Right", "Next palette", &theme),
        keybind("g", "Oldest palette", &theme),
        keybind("G", "Newest palette", &theme),
        Line::default(),
        section_header("Palette", &theme),
        keybind("Tab", "Select next color", &theme),
        keybind("Shift+Tab", "Select previous color", &theme),
        keybind("1-9", "Select color", &theme),
        keybind("f", "Cycle HEX / RGB / HSL", &theme),
        keybind("Enter", "Open shade scale", &theme),
    ];

    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    // Right column - Shades & General
    let right_content = vec![
        section_header("Shades", &theme),
        keybind("j / Down", "Next shade", &theme),
        keybind("k / Up", "Previous shade", &theme),
        keybind("e / Tab", "Cycle export format", &theme),
        keybind("Esc / Bksp", "Back to palette", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("?", "Toggle this help", &theme),
        keybind("q", "Quit", &theme),
        keybind("Esc", "Quit (palette screen)", &theme),
        Line::default(),
        Line::from(Span::styled(
            format!("  Generator: {}", state.mode.label()),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];

    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Notation;
    use crate::palette::{ExportFormat, GeneratorMode};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_lists_the_mapped_keys() {
        let state = AppState::new(GeneratorMode::Random, Notation::Hex, ExportFormat::Css);
        let text = rendered(&state);
        assert!(text.contains("1-9"), "{text}");
        assert!(!text.contains("1-5"));
        assert!(text.contains("Esc / Bksp"));
        assert!(text.contains("Quit (palette screen)"));
        assert!(text.contains("Generator: random"));
    }
}
