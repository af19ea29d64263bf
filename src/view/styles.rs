//! Table styling configuration.
//!
//! Provides the color scheme for headers, rows, tabs and status lines, with a
//! monochrome fallback when colors are disabled.

use ratatui::style::{Color, Modifier, Style};

/// Muted text for hints and secondary information.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Section headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// False when `--no-color` or `NO_COLOR` is set.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles shared by every widget of the table screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Even data rows.
    pub row: Style,
    /// Odd data rows.
    pub alt_row: Style,
    /// Selected resource or category tab.
    pub active_tab: Style,
    /// Other tabs.
    pub inactive_tab: Style,
    /// Current page marker.
    pub current_page: Style,
    /// Other page markers and arrows.
    pub page_link: Style,
    /// Fetch error text.
    pub error: Style,
    /// Loading indicator.
    pub loading: Style,
    /// Secondary text such as the status line.
    pub muted: Style,
    /// Search and filter prompt border.
    pub prompt: Style,
}

impl TableStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors, emphasis is carried by modifiers alone.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                row: Style::default().fg(Color::White),
                alt_row: Style::default().fg(Color::Gray),
                active_tab: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                inactive_tab: Style::default().fg(Color::Gray),
                current_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                page_link: Style::default().fg(Color::Cyan),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                loading: Style::default().fg(Color::Yellow),
                muted: MUTED_TEXT,
                prompt: Style::default().bg(Color::DarkGray),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                row: Style::default(),
                alt_row: Style::default(),
                active_tab: Style::default().add_modifier(Modifier::REVERSED),
                inactive_tab: Style::default(),
                current_page: Style::default().add_modifier(Modifier::REVERSED),
                page_link: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                loading: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                prompt: Style::default(),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(no_color_env)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");

        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color_env)]
    fn colors_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn monochrome_styles_use_no_colors() {
        let styles = TableStyles::with_color_config(ColorConfig::from_env_and_args(true));

        for style in [styles.header, styles.error, styles.active_tab, styles.page_link] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn current_page_stands_out_from_links() {
        let styles = TableStyles::with_color_config(ColorConfig::from_env_and_args(true));
        assert_ne!(styles.current_page, styles.page_link);
    }
}
