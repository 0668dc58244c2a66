//! Outfit dress-up TUI
//!
//! A terminal user interface for dressing up an outfit and copying its
//! style code to the clipboard.
//! Run with: dressup [--catalog <PATH>] [--log-file <PATH>]

mod app;
mod catalog;
mod cli;
mod clipboard;
mod code;
mod constants;
mod event;
mod layers;
mod logging;
mod outfit;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use crate::event::EventHandler;

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_config()).context("Failed to open log file")?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    info!(
        catalog = ?cli.catalog,
        groups = ?catalog.groups().iter().map(|g| g.name()).collect::<Vec<_>>(),
        code_len = catalog.code_len(),
        "starting dressup"
    );

    let app = App::new(Arc::new(catalog), Arc::new(SystemClipboard));

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Main application loop.
///
/// 1. Collect finished clipboard writes and expire old notifications
/// 2. Draw the current UI state
/// 3. Handle user input events
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let event_handler = EventHandler::new();

    loop {
        app.tick(chrono::Local::now());

        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        if let Some(action) = event_handler.next()? {
            if app.handle_event(action) {
                break;
            }
        }
    }

    info!("quitting");
    Ok(())
}
