//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each part of the screen is rendered by a separate submodule.

mod colors;
mod empty;
mod header;
mod help;
mod options;
mod preview;
mod save;
mod status;
mod tabs;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use header::draw_header;
use help::draw_help_overlay;
use options::draw_options_panel;
use preview::draw_preview;
use status::{draw_commands_bar, draw_status_bar};
use tabs::draw_tab_bar;

/// Main draw function - lays out the screen and dispatches to the renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Header, tab bar, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Length(layout::TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_tab_bar(frame, chunks[1], app);

    // Option panel on the left, the dressed model on the right
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout::OPTIONS_WIDTH_PERCENT),
            Constraint::Percentage(100 - layout::OPTIONS_WIDTH_PERCENT),
        ])
        .split(chunks[2]);

    draw_options_panel(frame, content[0], app);
    draw_preview(frame, content[1], app);

    draw_commands_bar(frame, chunks[3], app);
    draw_status_bar(frame, chunks[4], app);

    if app.show_help {
        draw_help_overlay(frame);
    }
}
