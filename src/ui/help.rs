//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// One help section: heading followed by key/description rows.
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "TABS",
        &[
            ("h / Left ", "Previous tab"),
            ("l / Right", "Next tab"),
            ("Tab      ", "Next tab"),
            ("1 .. 5   ", "Tops, bottoms, shoes, accessories, save"),
        ],
    ),
    (
        "OUTFIT",
        &[
            ("j / Down ", "Move to next option"),
            ("k / Up   ", "Move to previous option"),
            ("g / G    ", "Jump to first / last option"),
            ("Enter    ", "Wear or take off the option"),
            ("x        ", "Take everything off"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("c / y    ", "Copy the style code to clipboard"),
            ("? / F1   ", "Show this help"),
            ("q / Ctrl+C", "Quit application"),
        ],
    ),
];

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();

    let mut lines = vec![Line::from("")];
    for (heading, rows) in SECTIONS {
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(format!("◆ {heading}"), section_style),
        ]));
        lines.push(Line::from(""));
        for &(key, desc) in rows {
            lines.push(Line::from(vec![
                Span::styled("    ", Style::default()),
                Span::styled(key, key_style),
                Span::styled("  ", Style::default()),
                Span::styled(desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    Text::from(lines)
}
