//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::outfit::Tab;

use super::colors;

/// Draws the commands bar showing available actions for the active tab.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands_for_tab(app.outfit.active_tab());

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available on a tab.
fn get_commands_for_tab(tab: Tab) -> Vec<(&'static str, &'static str)> {
    let toggle = match tab {
        Tab::Accessories => ("Enter", "wear/remove"),
        Tab::Save => ("Enter", "spray"),
        _ => ("Enter", "wear"),
    };
    vec![
        ("h/l", "tabs"),
        ("j/k", "navigate"),
        toggle,
        ("c", "copy code"),
        ("x", "clear"),
        ("?", "help"),
        ("q", "quit"),
    ]
}

/// Draws the status bar at the bottom (for notifications).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (
            format!(" {} {} ", status.shown_at.format("%H:%M:%S"), status.text),
            style,
        )
    } else if app.is_copying() {
        (" Copying...".to_string(), Style::default().fg(colors::WARNING))
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
