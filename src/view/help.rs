//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{MUTED_TEXT, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut sections: header, then `(keys, description)` rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("n / → / PgDn", "Next page"),
            ("p / ← / PgUp", "Previous page"),
            ("g / Home", "First page"),
            ("G / End", "Last page"),
            ("+ / -", "Cycle rows per page (5, 10, 20, 50)"),
        ],
    ),
    (
        "Rows",
        &[("j / ↓", "Scroll down"), ("k / ↑", "Scroll up")],
    ),
    (
        "Tabs",
        &[
            ("Tab", "Switch between Users and Products"),
            ("] / [", "Next / previous product category"),
        ],
    ),
    (
        "Search & Filters",
        &[
            ("/", "Search the current page"),
            ("Esc", "Clear search"),
            ("f", "Filter by field (Tab cycles fields)"),
            ("x", "Reset filters"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Refresh / retry"),
            ("?", "Toggle this help"),
            ("q / Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (index, (header, rows)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*header, SECTION_HEADER)));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", keys), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
