//! Save tab: perfume choice and the outfit code to share.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::catalog::Category;
use crate::constants::{PERFUME_PROMPT, REDEEM_PROMPT};

use super::colors;
use super::options::{option_item, options_block, render_option_list};

/// Height of the code box below the perfume list.
const CODE_BOX_HEIGHT: u16 = 7;

/// Draws the perfume list and the code box.
pub fn draw_save_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(CODE_BOX_HEIGHT)])
        .split(area);

    let cursor = app.options_state.selected();
    let items: Vec<_> = app
        .panel_options()
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| option_item(app, Category::Perfume, idx, cursor == Some(pos)))
        .collect();

    let block = options_block(app, Category::Perfume, PERFUME_PROMPT);
    render_option_list(frame, chunks[0], items, block, cursor);

    draw_code_box(frame, chunks[1], app);
}

fn draw_code_box(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(Span::styled(
            REDEEM_PROMPT,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", app.code()),
            Style::default().bg(Color::White).fg(Color::Black).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("press ", Style::default().fg(colors::MUTED)),
            Span::styled("c", Style::default().fg(colors::KEY).bold()),
            Span::styled(" to copy", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let code = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::PRIMARY))
            .border_set(symbols::border::DOUBLE),
    );
    frame.render_widget(code, area);
}
