//! Palette screen: one full-height column per color

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, swatch, BorderStyle};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let p = &theme.palette;

    let Some(palette) = state.history.current() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("{} No palette yet - press Space", theme.icons.generate),
            Style::default().fg(p.fg_secondary),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let n = palette.len().max(1) as u32;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n); palette.len()])
        .split(area);

    for (i, (color, col)) in palette.colors.iter().zip(cols.iter()).enumerate() {
        let selected = i == state.selected;
        let fg = p.text_on(!color.is_light());
        // Columns blank out while a transition is pending.
        let bg = if state.changing { p.bg_primary } else { swatch(*color) };

        let mut block = Block::default().style(Style::default().bg(bg));
        if selected && !state.changing {
            block = block
                .borders(Borders::ALL)
                .border_set(BorderStyle::selected_set())
                .border_style(Style::default().fg(fg));
        }
        let inner = block.inner(*col);
        frame.render_widget(block, *col);

        if state.changing {
            continue;
        }

        let mut lines = Vec::new();
        let top_pad = (inner.height / 2).saturating_sub(1);
        lines.extend((0..top_pad).map(|_| Line::default()));
        lines.push(Line::from(Span::styled(
            color.format(state.notation),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} {}", i + 1, state.notation.label()),
            Style::default().fg(fg),
        )));
        if selected {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{} Enter: shades", theme.icons.shades),
                Style::default().fg(fg),
            )));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
