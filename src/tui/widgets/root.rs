//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen, ToastKind};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{help, palette_view, shades};

/// Main layout structure:
/// ┌──────────────────────────────────────────────────────┐
/// │ swatch  mode  ◀ ▶  ?palette=N  N/len  origin         │
/// ├──────────────────────────────────────────────────────┤
/// │                                                      │
/// │           Palette columns / Shades / Help            │
/// │                                                      │
/// ├──────────────────────────────────────────────────────┤
/// │ key hints or toast                                   │
/// └──────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Footer
        ])
        .split(root);

    render_header(frame, state, rows[0]);
    match state.screen {
        Screen::Palette => palette_view::render(frame, state, rows[1]),
        Screen::Shades => shades::render(frame, cfg, state, rows[1]),
        Screen::Help => help::render(frame, state, rows[1]),
    }
    render_footer(frame, state, rows[2]);
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let p = &theme.palette;

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(p.accent)
        } else {
            Style::default().fg(p.border)
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} swatch ", icons.palette),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", state.mode.label()),
            Style::default().fg(p.fg_secondary),
        ),
        Span::styled(format!("{} ", icons.prev), nav_style(state.history.can_go_back())),
        Span::styled(format!("{} ", icons.next), nav_style(state.history.can_go_forward())),
        Span::styled(state.status.clone(), Style::default().fg(p.accent_alt)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(p.bg_secondary)),
        area,
    );
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let p = &theme.palette;

    let line = if let Some(toast) = &state.toast {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (icons.success, p.accent),
            ToastKind::Error => (icons.error, p.error),
        };
        Line::from(Span::styled(
            format!(" {icon} {}", toast.message),
            Style::default().fg(color),
        ))
    } else {
        let hints: &[(&str, &str)] = match state.screen {
            Screen::Palette => &[
                ("Space", "new"),
                ("←/→", "history"),
                ("Tab/1-9", "select"),
                ("f", "format"),
                ("Enter", "shades"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Screen::Shades => &[
                ("↑/↓", "shade"),
                ("e", "export format"),
                ("f", "format"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            Screen::Help => &[("Esc", "back"), ("q", "quit")],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, desc) in hints {
            spans.push(Span::styled(
                *key,
                Style::default().fg(p.accent_alt).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {desc} {} ", icons.bullet),
                Style::default().fg(p.fg_secondary),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
