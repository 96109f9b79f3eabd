//! Shades screen: the 50-950 scale of the selected color, a read-out of the
//! highlighted shade and the export text for the whole scale

use crate::app::state::AppState;
use crate::color::{brightness, Color};
use crate::config::Config;
use crate::palette::export;
use crate::tui::theme::{get_theme, swatch, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, area: Rect) {
    let theme = get_theme();
    let p = &theme.palette;

    let Some(scale) = state.selected_scale() else {
        frame.render_widget(
            Paragraph::new("No color selected").style(Style::default().fg(p.fg_secondary)),
            area,
        );
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left: one row per shade
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, scale.len() as u32); scale.len()])
        .split(cols[0]);

    for (i, (shade, row)) in scale.iter().zip(rows.iter()).enumerate() {
        let fg = p.text_on(shade.is_dark);
        let marker = if i == state.shade_selected {
            theme.icons.selected
        } else {
            theme.icons.unselected
        };
        let base = if shade.level == 500 { "  base" } else { "" };
        let line = Line::from(vec![
            Span::styled(format!(" {marker} {:<5}", shade.level), Style::default().fg(fg)),
            Span::styled(
                shade.color.format(state.notation),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(base, Style::default().fg(fg)),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(swatch(shade.color))),
            *row,
        );
    }

    // Right: read-out + export
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(cols[1]);

    if let Some(shade) = scale.shades().get(state.shade_selected) {
        render_readout(frame, &theme, shade.level, shade.color, right[0]);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(p.border))
        .title(format!(
            " {} {} · {} ",
            theme.icons.export,
            state.export_format.label(),
            scale.base()
        ))
        .title_style(Style::default().fg(p.accent));

    let text = match export::render(&scale, state.export_format, &cfg.export.token) {
        Ok(text) => text,
        Err(e) => format!("{} {e:#}", theme.icons.error),
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(p.fg_secondary))
            .wrap(Wrap { trim: false })
            .block(block),
        right[1],
    );
}

fn render_readout(frame: &mut Frame, theme: &Theme, level: u16, color: Color, area: Rect) {
    let p = &theme.palette;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(p.border))
        .title(format!(" {} {} · {} ", theme.icons.info, color, level))
        .title_style(Style::default().fg(p.accent));

    let tone = if color.is_light() { "light" } else { "dark" };
    let lines = vec![
        field("HEX", color.to_hex(), theme),
        field("RGB", color.rgb_string(), theme),
        field("HSL", color.to_hsl().to_string(), theme),
        field("CMYK", color.to_cmyk().to_string(), theme),
        field("LUM", format!("{:.1}%", color.luminance() * 100.0), theme),
        field("TONE", format!("{tone} ({:.0})", brightness(color)), theme),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<6}"),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
