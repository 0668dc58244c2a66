//! Tab bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::app::App;
use crate::layers::tab_icon_path;
use crate::outfit::Tab;

use super::colors;

/// Draws the tab bar with the active tab highlighted.
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.outfit.active_tab();

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(colors::KEY)),
                Span::raw(tab.name()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(colors::MUTED))
        .highlight_style(
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .bold(),
        )
        .divider(Span::styled(" │ ", Style::default().fg(colors::BORDER)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title_bottom(
                    Line::from(Span::styled(
                        format!(" {} ", tab_icon_path(active, true)),
                        Style::default().fg(colors::MUTED),
                    ))
                    .right_aligned(),
                ),
        );

    frame.render_widget(tabs, area);
}
