//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;
use crate::outfit::Tab;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move the option cursor up
    Up,
    /// Move the option cursor down
    Down,
    /// Move to the first option
    Top,
    /// Move to the last option
    Bottom,
    /// Show the next tab
    NextTab,
    /// Show the previous tab
    PreviousTab,
    /// Jump straight to a tab
    SelectTab(Tab),
    /// Toggle the option under the cursor
    Toggle,
    /// Copy the outfit code to the clipboard
    Copy,
    /// Take everything off
    Clear,
    /// Show help
    Help,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Option cursor
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),

            // Tabs
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => Some(Action::PreviousTab),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c.to_digit(10)? as usize - 1;
                Tab::ALL.get(index).copied().map(Action::SelectTab)
            }

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
            KeyCode::Char('x') => Some(Action::Clear),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_tab_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::NextTab)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Tab)),
            Some(Action::NextTab)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Left)),
            Some(Action::PreviousTab)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::BackTab)),
            Some(Action::PreviousTab)
        );
    }

    #[test]
    fn test_number_keys_select_tab() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('1'))),
            Some(Action::SelectTab(Tab::Tops))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('4'))),
            Some(Action::SelectTab(Tab::Accessories))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            Some(Action::SelectTab(Tab::Save))
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_toggle_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Toggle)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::Toggle)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_action_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('y'))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('x'))),
            Some(Action::Clear)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }
}
