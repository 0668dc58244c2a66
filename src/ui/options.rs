//! Option panel rendering for the clothing tabs.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

use crate::app::App;
use crate::catalog::Category;
use crate::layers::option_icon_path;
use crate::outfit::Tab;

use super::colors;
use super::empty::draw_empty_state;
use super::save::draw_save_panel;

/// Draws the options of the active tab.
pub fn draw_options_panel(frame: &mut Frame, area: Rect, app: &App) {
    let tab = app.outfit.active_tab();
    if tab == Tab::Save {
        draw_save_panel(frame, area, app);
        return;
    }

    let category = tab.category();
    if app.panel_options().is_empty() {
        draw_empty_state(
            frame,
            area,
            "Nothing to wear here",
            "The catalog has no options for this tab",
        );
        return;
    }

    let (items, cursor_row) = if category == Category::Accessories {
        accessory_items(app)
    } else {
        let cursor = app.options_state.selected();
        let items = app
            .panel_options()
            .into_iter()
            .enumerate()
            .map(|(pos, idx)| option_item(app, category, idx, cursor == Some(pos)))
            .collect();
        (items, cursor)
    };

    let block = options_block(app, category, tab.name());
    render_option_list(frame, area, items, block, cursor_row);
}

/// Renders option rows, scrolled so the row at `cursor_row` stays visible.
pub(super) fn render_option_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    block: Block<'static>,
    cursor_row: Option<usize>,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    let mut state = ListState::default();
    state.select(cursor_row);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Builds the accessory rows with a heading above every section, and returns
/// the row holding the cursor.
fn accessory_items(app: &App) -> (Vec<ListItem<'static>>, Option<usize>) {
    let catalog = app.outfit.catalog();
    let cursor = app.options_state.selected();

    let mut sections = vec![("Accessories".to_string(), catalog.misc_accessories())];
    sections.extend(catalog.groups().iter().map(|g| (g.title(), g.members())));

    let mut items = Vec::new();
    let mut cursor_row = None;
    let mut pos = 0;

    for (title, members) in sections {
        if members.is_empty() {
            continue;
        }
        items.push(section_heading(&title));
        for &idx in members {
            let highlighted = cursor == Some(pos);
            if highlighted {
                cursor_row = Some(items.len());
            }
            items.push(option_item(app, Category::Accessories, idx, highlighted));
            pos += 1;
        }
    }

    (items, cursor_row)
}

fn section_heading(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled("▾ ", Style::default().fg(colors::ACCENT)),
        Span::styled(title.to_string(), Style::default().fg(colors::PRIMARY).bold()),
    ]))
}

/// One option row: position, worn marker and name.
pub(super) fn option_item(
    app: &App,
    category: Category,
    idx: usize,
    highlighted: bool,
) -> ListItem<'static> {
    let name = app
        .outfit
        .catalog()
        .option(category, idx)
        .unwrap_or_default()
        .to_string();
    let selected = app.outfit.is_selected(category, &name);

    let style = if highlighted {
        Style::default()
            .bg(colors::SELECTION)
            .fg(colors::SELECTION_TEXT)
    } else {
        Style::default()
    };

    let (marker, marker_color) = if selected {
        ("●", colors::SECONDARY)
    } else {
        ("○", colors::MUTED)
    };

    let name_style = if selected {
        style.fg(if highlighted {
            colors::SELECTION_TEXT
        } else {
            colors::SECONDARY
        })
        .add_modifier(Modifier::BOLD)
    } else {
        style
    };

    let content = Line::from(vec![
        Span::styled(format!("{:>3}", idx + 1), Style::default().fg(colors::ACCENT)),
        Span::styled("  ", style),
        Span::styled(marker, style.fg(marker_color)),
        Span::styled(" ", style),
        Span::styled(name, name_style),
    ]);

    ListItem::new(content).style(style)
}

/// Panel border with the tab name on top and the icon of the option under
/// the cursor at the bottom.
pub(super) fn options_block(app: &App, category: Category, title: &str) -> Block<'static> {
    let worn = app
        .panel_options()
        .into_iter()
        .filter(|&idx| app.is_selected(category, idx))
        .count();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(title.to_string(), Style::default().fg(Color::White).bold()),
            Span::styled(
                format!(" {worn} on "),
                Style::default().fg(colors::SECONDARY),
            ),
        ]))
        .padding(Padding::horizontal(1));

    if let Some(idx) = app.highlighted() {
        if let Some(option) = app.outfit.catalog().option(category, idx) {
            let icon = option_icon_path(category, option, app.is_selected(category, idx));
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {icon} "),
                    Style::default().fg(colors::MUTED),
                ))
                .right_aligned(),
            );
        }
    }

    block
}
