//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Go to the next page. Default: n/→/PageDown
    NextPage,
    /// Go to the previous page. Default: p/←/PageUp
    PrevPage,
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Page size menu
    /// Next larger page size (5 → 10 → 20 → 50). Default: +
    IncreasePageSize,
    /// Next smaller page size. Default: -
    DecreasePageSize,

    // Rows
    /// Scroll the visible rows up by one. Default: k/↑
    ScrollUp,
    /// Scroll the visible rows down by one. Default: j/↓
    ScrollDown,

    // Resource / category tabs
    /// Switch between the users and products tables. Default: Tab
    SwitchResource,
    /// Select the next category tab (products only). Default: ]
    NextCategory,
    /// Select the previous category tab (products only). Default: [
    PrevCategory,

    // Search and filters
    /// Open the client-side search input. Default: /
    StartSearch,
    /// Clear the search term. Default: Esc
    ClearSearch,
    /// Open the filter editor on the first filter field. Default: f
    StartFilter,
    /// Drop all filters. Default: x
    ResetFilters,

    // Application
    /// Reissue the current request. Default: r
    Refresh,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
