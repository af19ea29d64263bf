//! Tests for screen layout rendering.

use super::*;
use crate::model::{KeyAction, Page, PageSize, Record};
use crate::state::{FetchOutcome, InputMode, TextInput};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

// ===== Test Helpers =====

fn create_test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 30)).unwrap()
}

fn render(state: &AppState) -> String {
    let mut terminal = create_test_terminal();
    let styles = TableStyles::default();
    terminal
        .draw(|frame| render_layout(frame, state, &styles))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn products_state() -> AppState {
    let mut state = AppState::new(
        ResourceKind::Products,
        PageSize::Five,
        &["laptops".to_string(), "smartphones".to_string()],
    );
    let ticket = state.start();
    state.apply_outcome(FetchOutcome::for_ticket(
        &ticket,
        Ok(Page {
            items: vec![
                Record::from(json!({ "title": "Essence Mascara", "brand": "Essence", "price": 9.99 })),
                Record::from(json!({ "title": "Eyeshadow Palette", "brand": "Glamour Beauty", "price": 19.99 })),
            ],
            total: 194,
        }),
    ));
    state
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

// ===== render_layout =====

#[test]
fn products_screen_shows_tabs_table_and_pagination() {
    let content = render(&products_state());

    assert!(content.contains("Products"));
    assert!(content.contains("Smartphones"), "category row missing");
    assert!(content.contains("Essence Mascara"));
    assert!(content.contains("1-5 of 194"), "pagination missing");
}

#[test]
fn users_screen_has_no_category_row() {
    let mut state = AppState::new(ResourceKind::Users, PageSize::Five, &["laptops".to_string()]);
    let ticket = state.start();
    state.apply_outcome(FetchOutcome::for_ticket(&ticket, Ok(Page::default())));

    let content = render(&state);

    assert!(!content.contains("Laptops"));
    assert!(content.contains("No data found"));
}

#[test]
fn prompt_appears_while_editing() {
    let mut state = products_state();
    state.input_mode = InputMode::Search(TextInput::with_text("mascara"));

    let content = render(&state);

    assert!(content.contains("Search"));
    assert!(content.contains("mascara"));
}

#[test]
fn help_overlay_drawn_on_top() {
    let mut state = products_state();
    state.handle_action(KeyAction::Help);

    assert!(render(&state).contains("Keyboard Shortcuts"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    let state = products_state();
    let styles = TableStyles::default();

    let result = terminal.draw(|frame| render_layout(frame, &state, &styles));

    assert!(result.is_ok());
}

// ===== status_line =====

#[test]
fn status_line_without_query_says_no_filters() {
    let state = products_state();
    let text = line_text(&status_line(&state, &TableStyles::default()));

    assert!(text.contains("No filters"), "got: {}", text);
    assert!(text.contains("Updated"), "got: {}", text);
}

#[test]
fn status_line_lists_category_and_search() {
    let mut state = products_state();
    let _ticket = state.handle_action(KeyAction::NextCategory);
    state.handle_action(KeyAction::StartSearch);
    state.input_char('e');

    let text = line_text(&status_line(&state, &TableStyles::default()));

    assert!(text.contains("category=laptops"), "got: {}", text);
    assert!(text.contains("search=\"e\""), "got: {}", text);
}
