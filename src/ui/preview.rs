//! Preview of the dressed model as a stack of overlay layers.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

use crate::app::App;
use crate::layers::overlay_layers;

use super::colors;

/// Draws the overlay stack, top layer first.
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let layers = overlay_layers(&app.outfit);
    let count = layers.len();

    let items: Vec<ListItem> = layers
        .into_iter()
        .enumerate()
        .rev()
        .map(|(z, layer)| {
            let color = colors::layer(layer.category);
            let kind = layer.category.map_or("base", |c| c.name());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{z:>2} "), Style::default().fg(colors::MUTED)),
                    Span::styled("▓▓ ", Style::default().fg(color)),
                    Span::styled(format!("{kind:<12}"), Style::default().fg(color)),
                    Span::styled(layer.label, Style::default().fg(Color::White).bold()),
                ]),
                Line::from(Span::styled(
                    format!("      {}", layer.asset),
                    Style::default().fg(colors::MUTED),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .border_set(symbols::border::ROUNDED)
            .title(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(
                    format!("{count}"),
                    Style::default().fg(colors::SECONDARY).bold(),
                ),
                Span::styled(" layers ", Style::default().fg(Color::White)),
            ]))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(list, area);
}
