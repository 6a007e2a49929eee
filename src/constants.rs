//! Constants used throughout the application
//!
//! This module centralizes placeholder texts, default key specs, layout
//! measurements and other constant values.

// Placeholder frames
pub const MSG_SETTING_UP_TERMINAL: &str = "setting up terminal...";
pub const MSG_HEADERS_TOO_SMALL: &str = "terminal size is not enough to show headers";
pub const MSG_WIDGETS_TOO_SMALL: &str = "terminal size is not enough to show widgets";

// Default terminal size until the first resize event arrives
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

// Default key specs
pub const KEY_NEXT_TAB: &str = "ctrl+right";
pub const KEY_PREV_TAB: &str = "ctrl+left";
pub const KEY_QUIT: &str = "ctrl+c";

// Tab and widget box measurements
pub const DEFAULT_TAB_PADDING: u16 = 2;
pub const DEFAULT_WIDGET_PADDING: u16 = 2;
pub const MAX_PADDING: u16 = 16;
/// Left and right border columns of a single tab or widget box
pub const BOX_BORDER_COLUMNS: usize = 2;
/// Outer frame columns (left and right corner)
pub const FRAME_BORDER_COLUMNS: usize = 2;

// Strip heights in rows
pub const HEADER_HEIGHT: u16 = 3;
pub const WIDGET_BAR_HEIGHT: u16 = 3;
pub const EMPTY_WIDGET_BAR_HEIGHT: u16 = 2;

// Files
pub const CONFIG_FILE_NAME: &str = "tabframe.toml";
pub const APP_DIR_NAME: &str = "tabframe";
pub const LOG_FILE_NAME: &str = "tabframe.log";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Host loop timing
pub const INPUT_POLL_INTERVAL_MS: u64 = 100;
