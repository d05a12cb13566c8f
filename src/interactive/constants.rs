//! Constants for the interactive TUI module
//!
//! Timing, layout and text values shared by the runtime and the components.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the header row (title, search box, theme indicator)
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the application title column in the header
pub const HEADER_TITLE_WIDTH: u16 = 20;

/// Width of the theme indicator column in the header
pub const HEADER_THEME_WIDTH: u16 = 12;

/// Width of the sidebar
pub const SIDEBAR_WIDTH: u16 = 36;

/// Terminals narrower than this hide the sidebar unless it is opened
pub const NARROW_TERMINAL_WIDTH: u16 = 80;

/// Maximum height of the search results dialog, borders included
pub const SEARCH_DIALOG_MAX_HEIGHT: u16 = 14;

/// Page size for PageUp/PageDown scrolling
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Text
pub const APP_TITLE: &str = "Learn JS & More";
pub const SEARCH_PLACEHOLDER: &str = "Search methods...";
pub const EMPTY_CONTENT_TEXT: &str = "Select a method from the sidebar to view its details";
pub const LOADING_TEXT: &str = "Loading...";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
pub const SIDEBAR_FOOTER: &str = "Made with ♥ by S M Saiful Alom";
