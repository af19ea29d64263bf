//! Layout dimension constants for TUI rendering.

/// Height of the resource tab bar (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the products category tab row.
pub const CATEGORY_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the search/filter prompt (border + text).
pub const PROMPT_HEIGHT: u16 = 3;

/// Columns never shrink below this many cells.
pub const MIN_COLUMN_WIDTH: u16 = 6;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before draining fetch results.
pub const TICK_INTERVAL_MS: u64 = 100;
