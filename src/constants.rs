//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How long a status notification stays on screen, in seconds.
pub const STATUS_LIFETIME_SECS: i64 = 4;

/// Notification shown after the outfit code reached the clipboard.
pub const COPIED_MESSAGE: &str = "Style code copied to clipboard!";

/// Text shown above the outfit code on the save tab.
pub const REDEEM_PROMPT: &str = "Share this code on Hinge to redeem:";

/// Heading of the perfume options on the save tab.
pub const PERFUME_PROMPT: &str = "Spray me!";

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including title and code.
    pub const HEADER_HEIGHT: u16 = 3;
    /// Tab bar height.
    pub const TAB_BAR_HEIGHT: u16 = 3;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Share of the main area given to the option panel.
    pub const OPTIONS_WIDTH_PERCENT: u16 = 45;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
}
