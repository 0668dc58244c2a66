//! Header rendering: title, style code and copy indicator.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the header with the title and the current outfit code.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let muted_style = Style::default().fg(colors::MUTED);

    // Copy indicator
    let indicator = if app.is_copying() {
        vec![
            Span::styled(
                " ◈ ",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled("COPYING", Style::default().fg(colors::WARNING).bold()),
        ]
    } else {
        vec![
            Span::styled(" ◈ ", Style::default().fg(colors::SUCCESS)),
            Span::styled("READY", Style::default().fg(colors::SUCCESS).bold()),
        ]
    };

    let mut spans = vec![
        Span::styled(" ◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" DRESS", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("UP", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("style code ", muted_style),
        Span::styled(
            app.code().to_string(),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled("  ┃", border_style),
    ];
    spans.extend(indicator);
    spans.push(Span::styled(" ┃ ", border_style));
    spans.push(Span::styled(
        format!("v{}", env!("CARGO_PKG_VERSION")),
        muted_style,
    ));

    let header = Paragraph::new(vec![Line::from(""), Line::from(spans)]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style),
    );
    frame.render_widget(header, area);
}
