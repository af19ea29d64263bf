//! Screen layout rendering.
//!
//! Stacks the resource tabs, the products category row, the prompt, the
//! table, the pagination bar and the status bar, then draws the help
//! overlay on top when it is open.

use crate::model::ResourceKind;
use crate::state::AppState;
use crate::view::constants::{
    CATEGORY_BAR_HEIGHT, PAGINATION_BAR_HEIGHT, PROMPT_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
};
use crate::view::{help, pagination_bar, search_input::SearchInput, table, tabs, TableStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TableStyles) {
    let show_categories = state.active() == ResourceKind::Products;
    let show_prompt = state.input_mode.is_editing();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(if show_categories { CATEGORY_BAR_HEIGHT } else { 0 }),
            Constraint::Length(if show_prompt { PROMPT_HEIGHT } else { 0 }),
            Constraint::Min(3), // Table
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    tabs::render_resource_tabs(frame, chunks[0], state.active(), styles);

    if show_categories {
        tabs::render_category_tabs(
            frame,
            chunks[1],
            state.product_tabs(),
            state.selected_tab(),
            styles,
        );
    }

    if show_prompt {
        frame.render_widget(
            SearchInput::new(&state.input_mode, state.active()).block_style(styles.prompt),
            chunks[2],
        );
    }

    let view = state.active_table().view();
    table::render_table(frame, chunks[3], &view, state.row_offset(), styles);
    pagination_bar::render_pagination_bar(frame, chunks[4], &view, styles);
    render_status_bar(frame, chunks[5], state, styles);

    if state.help_visible {
        help::render_help_overlay(frame);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    frame.render_widget(Paragraph::new(status_line(state, styles)), area);
}

/// Status line: active query (category, filters, search), last load time,
/// and the help hint.
pub fn status_line(state: &AppState, styles: &TableStyles) -> Line<'static> {
    let table = state.active_table();
    let mut parts = Vec::new();

    if state.active() == ResourceKind::Products && !table.category().is_all() {
        parts.push(format!("category={}", table.category().as_str()));
    }
    for (field, value) in table.filters().iter().filter(|(_, value)| !value.is_empty()) {
        parts.push(format!("{}={}", field, value));
    }
    if !table.search_term().is_empty() {
        parts.push(format!("search=\"{}\"", table.search_term()));
    }

    let query = if parts.is_empty() {
        "No filters".to_string()
    } else {
        parts.join("  ")
    };

    let loaded = table
        .last_loaded_at()
        .map(|at| format!(" | Updated {}", at.format("%H:%M:%S")))
        .unwrap_or_default();

    Line::from(vec![
        Span::raw(format!(" {}", query)),
        Span::styled(loaded, styles.muted),
        Span::styled(" | ?: help  q: quit", styles.muted),
    ])
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
