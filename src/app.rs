//! Application state and logic.
//!
//! This module contains the application state, the option cursor, status
//! notifications and event handling logic.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta};
use ratatui::widgets::ListState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Category};
use crate::clipboard::{spawn_copy, Clipboard, CopyOutcome};
use crate::code::{generate_code, OutfitCode};
use crate::constants::{COPIED_MESSAGE, STATUS_LIFETIME_SECS};
use crate::event::Action;
use crate::outfit::{Outfit, Tab};

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
    /// When the message was raised
    pub shown_at: DateTime<Local>,
}

/// Main application state.
pub struct App {
    /// The outfit being dressed
    pub outfit: Outfit,
    /// Cursor over the options of the active tab
    pub options_state: ListState,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help visibility
    pub show_help: bool,

    clipboard: Arc<dyn Clipboard>,
    /// Clipboard writes spawned but not yet reported back.
    copies_in_flight: usize,
    copy_tx: UnboundedSender<CopyOutcome>,
    copy_rx: UnboundedReceiver<CopyOutcome>,
}

impl App {
    /// Creates a new application with an empty outfit.
    pub fn new(catalog: Arc<Catalog>, clipboard: Arc<dyn Clipboard>) -> Self {
        let (copy_tx, copy_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            outfit: Outfit::new(catalog),
            options_state: ListState::default(),
            status: None,
            copies_in_flight: 0,
            show_help: false,
            clipboard,
            copy_tx,
            copy_rx,
        };
        app.reset_cursor();
        app
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match action {
            Action::Quit => return true,
            Action::Up => self.select_previous_option(),
            Action::Down => self.select_next_option(),
            Action::Top => self.select_first_option(),
            Action::Bottom => self.select_last_option(),
            Action::NextTab => self.set_tab(self.outfit.active_tab().next()),
            Action::PreviousTab => self.set_tab(self.outfit.active_tab().previous()),
            Action::SelectTab(tab) => self.set_tab(tab),
            Action::Toggle => self.toggle_highlighted(),
            Action::Copy => self.copy_code(),
            Action::Clear => self.clear_outfit(),
            Action::Help => {}
        }
        false
    }

    /// Runs once per loop iteration: collects finished copies and expires
    /// the status message.
    pub fn tick(&mut self, now: DateTime<Local>) {
        while let Ok(outcome) = self.copy_rx.try_recv() {
            self.apply_copy_outcome(outcome);
        }
        self.expire_status(now);
    }

    /// The current outfit code.
    pub fn code(&self) -> OutfitCode {
        generate_code(&self.outfit)
    }

    // --- Tabs and option cursor ---

    fn set_tab(&mut self, tab: Tab) {
        if tab == self.outfit.active_tab() {
            return;
        }
        debug!(%tab, "switching tab");
        self.outfit.set_active_tab(tab);
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        let first = if self.panel_options().is_empty() {
            None
        } else {
            Some(0)
        };
        self.options_state.select(first);
    }

    /// Catalog indices of the options on the active tab, in display order.
    ///
    /// Accessories are grouped: free accessories first, then each exclusive
    /// group in turn.
    pub fn panel_options(&self) -> Vec<usize> {
        let catalog = self.outfit.catalog();
        match self.outfit.active_tab() {
            Tab::Accessories => catalog
                .misc_accessories()
                .iter()
                .chain(catalog.groups().iter().flat_map(|g| g.members()))
                .copied()
                .collect(),
            tab => (0..catalog.options(tab.category()).len()).collect(),
        }
    }

    /// Catalog index of the option under the cursor.
    pub fn highlighted(&self) -> Option<usize> {
        self.options_state
            .selected()
            .and_then(|pos| self.panel_options().get(pos).copied())
    }

    fn select_previous_option(&mut self) {
        let len = self.panel_options().len();
        if len == 0 {
            return;
        }
        let current = self.options_state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        self.options_state.select(Some(new));
    }

    fn select_next_option(&mut self) {
        let len = self.panel_options().len();
        if len == 0 {
            return;
        }
        let current = self.options_state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        self.options_state.select(Some(new));
    }

    fn select_first_option(&mut self) {
        if !self.panel_options().is_empty() {
            self.options_state.select(Some(0));
        }
    }

    fn select_last_option(&mut self) {
        let len = self.panel_options().len();
        if len > 0 {
            self.options_state.select(Some(len - 1));
        }
    }

    // --- Outfit changes ---

    fn toggle_highlighted(&mut self) {
        let category = self.outfit.active_tab().category();
        let Some(option) = self
            .highlighted()
            .and_then(|idx| self.outfit.catalog().option(category, idx))
            .map(str::to_string)
        else {
            return;
        };

        match self.outfit.toggle_option(&option) {
            Ok(()) => debug!(%category, %option, code = %self.code(), "toggled option"),
            Err(e) => {
                warn!(error = %e, "toggle rejected");
                self.notify_error(&e.to_string());
            }
        }
    }

    fn clear_outfit(&mut self) {
        if self.outfit.is_empty() {
            return;
        }
        self.outfit.clear();
        info!("outfit cleared");
        self.notify_success("Outfit cleared");
    }

    // --- Clipboard ---

    /// Copies the outfit code to the clipboard in the background.
    ///
    /// The result arrives through `tick`.
    pub fn copy_code(&mut self) {
        let code = self.code();
        info!(%code, "copying outfit code");
        self.copies_in_flight += 1;
        spawn_copy(Arc::clone(&self.clipboard), code, self.copy_tx.clone());
    }

    /// Is a clipboard write in flight?
    pub fn is_copying(&self) -> bool {
        self.copies_in_flight > 0
    }

    fn apply_copy_outcome(&mut self, outcome: CopyOutcome) {
        self.copies_in_flight = self.copies_in_flight.saturating_sub(1);
        match outcome.result {
            Ok(()) => {
                info!(code = %outcome.code, "outfit code copied");
                self.notify_success(COPIED_MESSAGE);
            }
            Err(e) => self.notify_error(&e.to_string()),
        }
    }

    // --- Status message helpers ---

    /// Shows a success notification.
    pub fn notify_success(&mut self, text: &str) {
        self.set_status(text, false);
    }

    /// Shows an error notification.
    pub fn notify_error(&mut self, text: &str) {
        self.set_status(text, true);
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
            shown_at: Local::now(),
        });
    }

    fn expire_status(&mut self, now: DateTime<Local>) {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|s| now - s.shown_at >= TimeDelta::seconds(STATUS_LIFETIME_SECS));
        if expired {
            self.status = None;
        }
    }

    /// Returns true if the option at catalog index `idx` of `category` is
    /// selected.
    pub fn is_selected(&self, category: Category, idx: usize) -> bool {
        match category {
            Category::Accessories => self.outfit.wears(idx),
            _ => self.outfit.selected_index(category) == Some(idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::FakeClipboard;

    fn app_with(clipboard: Arc<dyn Clipboard>) -> App {
        App::new(Arc::new(Catalog::builtin()), clipboard)
    }

    fn app() -> App {
        app_with(Arc::new(FakeClipboard::default()))
    }

    fn press(app: &mut App, actions: &[Action]) {
        for &action in actions {
            assert!(!app.handle_event(action), "{action:?} should not quit");
        }
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.outfit.active_tab(), Tab::Tops);
        assert_eq!(app.options_state.selected(), Some(0));
        assert_eq!(app.code().as_str(), "0000000000");
    }

    #[test]
    fn test_toggle_under_cursor() {
        let mut app = app();
        press(&mut app, &[Action::Down, Action::Toggle]);
        assert_eq!(app.outfit.selected(Category::Tops), Some("Hoodie"));
        press(&mut app, &[Action::Toggle]);
        assert_eq!(app.outfit.selected(Category::Tops), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        press(&mut app, &[Action::Up]);
        assert_eq!(app.options_state.selected(), Some(5));
        press(&mut app, &[Action::Down]);
        assert_eq!(app.options_state.selected(), Some(0));
        press(&mut app, &[Action::Bottom, Action::Top]);
        assert_eq!(app.options_state.selected(), Some(0));
    }

    #[test]
    fn test_tab_switch_resets_cursor() {
        let mut app = app();
        press(&mut app, &[Action::Bottom, Action::NextTab]);
        assert_eq!(app.outfit.active_tab(), Tab::Bottoms);
        assert_eq!(app.options_state.selected(), Some(0));
        press(&mut app, &[Action::PreviousTab, Action::PreviousTab]);
        assert_eq!(app.outfit.active_tab(), Tab::Save);
    }

    #[test]
    fn test_accessory_panel_groups_options() {
        let mut app = app();
        press(&mut app, &[Action::SelectTab(Tab::Accessories)]);
        assert_eq!(app.panel_options(), (0..11).collect::<Vec<_>>());

        // Glasses Square, then Glasses Round
        press(&mut app, &[Action::Down; 4]);
        press(&mut app, &[Action::Toggle, Action::Down, Action::Toggle]);
        let worn: Vec<&str> = app.outfit.accessories().collect();
        assert_eq!(worn, ["Glasses Round"]);
    }

    #[test]
    fn test_save_tab_toggles_perfume() {
        let mut app = app();
        press(&mut app, &[Action::SelectTab(Tab::Save), Action::Down, Action::Toggle]);
        assert_eq!(app.outfit.selected(Category::Perfume), Some("Smoky"));
        assert_eq!(app.code().as_str(), "0000000002");
    }

    #[test]
    fn test_clear_resets_outfit() {
        let mut app = app();
        press(&mut app, &[Action::Toggle, Action::Clear]);
        assert!(app.outfit.is_empty());
        assert!(app.status.as_ref().is_some_and(|s| !s.is_error));
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        press(&mut app, &[Action::Help]);
        assert!(app.show_help);
        press(&mut app, &[Action::Toggle]);
        assert!(!app.show_help);
        assert!(app.outfit.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_status_expires() {
        let mut app = app();
        app.notify_success("hello");
        let shown_at = app.status.as_ref().map(|s| s.shown_at).unwrap();

        app.tick(shown_at + TimeDelta::seconds(1));
        assert!(app.status.is_some());
        app.tick(shown_at + TimeDelta::seconds(STATUS_LIFETIME_SECS));
        assert!(app.status.is_none());
    }

    #[tokio::test]
    async fn test_copy_success_notifies() {
        let clipboard = Arc::new(FakeClipboard::default());
        let mut app = app_with(clipboard.clone());
        press(&mut app, &[Action::Down, Action::Toggle, Action::Copy]);
        assert!(app.is_copying());

        let outcome = app.copy_rx.recv().await.unwrap();
        app.apply_copy_outcome(outcome);

        assert!(!app.is_copying());
        assert_eq!(clipboard.contents(), ["2000000000"]);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, COPIED_MESSAGE);
        assert!(!status.is_error);
    }

    #[tokio::test]
    async fn test_overlapping_copies_stay_in_flight() {
        let clipboard = Arc::new(FakeClipboard::default());
        let mut app = app_with(clipboard.clone());
        press(&mut app, &[Action::Copy, Action::Copy]);

        let first = app.copy_rx.recv().await.unwrap();
        app.apply_copy_outcome(first);
        assert!(app.is_copying());

        let second = app.copy_rx.recv().await.unwrap();
        app.apply_copy_outcome(second);
        assert!(!app.is_copying());
        assert_eq!(clipboard.contents().len(), 2);
    }

    #[tokio::test]
    async fn test_copy_failure_is_not_fatal() {
        let mut app = app_with(Arc::new(FakeClipboard::failing()));
        press(&mut app, &[Action::Toggle, Action::Copy]);

        let outcome = app.copy_rx.recv().await.unwrap();
        app.apply_copy_outcome(outcome);

        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.starts_with("Clipboard not available"));
        assert_eq!(app.outfit.selected(Category::Tops), Some("Coat"));
        assert!(!app.handle_event(Action::Down));
    }
}
