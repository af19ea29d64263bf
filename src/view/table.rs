//! Record table widget.
//!
//! Renders the active resource's visible rows (current page after the
//! client-side search) under a header of column labels. Cells are truncated
//! by display width, so wide glyphs never overflow their column.

use super::constants::MIN_COLUMN_WIDTH;
use super::styles::TableStyles;
use crate::model::Column;
use crate::state::{TableStatus, TableView};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Gap between adjacent columns, in cells.
const COLUMN_SPACING: u16 = 1;

/// Shown when a record lacks a field.
const MISSING_VALUE: &str = "-";

const ELLIPSIS: char = '…';

/// Render the table for `view`, starting at row `row_offset` of the
/// visible items.
///
/// Empty results render "No data found"; an empty table that has not loaded
/// yet renders "Loading..." instead.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    view: &TableView<'_>,
    row_offset: usize,
    styles: &TableStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(table_title(view, styles));

    if view.items.is_empty() {
        let message = match view.status {
            TableStatus::Idle | TableStatus::Loading => Span::styled("Loading...", styles.loading),
            TableStatus::Loaded | TableStatus::Failed => {
                Span::styled("No data found", styles.muted)
            }
        };
        let paragraph = Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = view.resource.columns();
    let cells: Vec<Vec<String>> = view
        .items
        .iter()
        .skip(row_offset)
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    record
                        .display(column.key)
                        .unwrap_or_else(|| MISSING_VALUE.to_string())
                })
                .collect()
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let widths = column_widths(&natural_widths(columns, &cells), inner_width);

    let header = Row::new(
        columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| truncate_to_width(column.label, width)),
    )
    .style(styles.header);

    let rows = cells.into_iter().enumerate().map(|(index, row)| {
        let style = if (row_offset + index) % 2 == 0 {
            styles.row
        } else {
            styles.alt_row
        };
        Row::new(
            row.iter()
                .zip(&widths)
                .map(|(text, &width)| truncate_to_width(text, width)),
        )
        .style(style)
    });

    let table = Table::new(rows, widths.iter().map(|&w| Constraint::Length(w)))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(block);

    frame.render_widget(table, area);
}

/// Block title: resource name, then loading state or the error message.
fn table_title<'a>(view: &TableView<'a>, styles: &TableStyles) -> Line<'a> {
    let mut spans = vec![Span::raw(format!(" {} ", view.resource.title()))];

    if view.loading {
        spans.push(Span::styled("Loading... ", styles.loading));
    }
    if let Some(error) = view.error {
        spans.push(Span::styled(format!("{} ", error), styles.error));
    }

    Line::from(spans)
}

/// Widest cell per column, header included.
fn natural_widths(columns: &[Column], cells: &[Vec<String>]) -> Vec<u16> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let widest_cell = cells
                .iter()
                .filter_map(|row| row.get(index))
                .map(|text| text.width())
                .max()
                .unwrap_or(0);
            let width = widest_cell.max(column.label.width());
            u16::try_from(width).unwrap_or(u16::MAX)
        })
        .collect()
}

/// Fit natural column widths into `available` cells.
///
/// When everything fits, widths are returned unchanged. Otherwise the widest
/// columns are capped at a common width so narrow columns keep their full
/// contents. No column shrinks below [`MIN_COLUMN_WIDTH`] (or its natural
/// width, if smaller); a terminal too narrow even for that gets clipped.
pub fn column_widths(natural: &[u16], available: u16) -> Vec<u16> {
    if natural.is_empty() {
        return Vec::new();
    }

    let gaps = COLUMN_SPACING as u32 * (natural.len() as u32 - 1);
    let budget = (available as u32).saturating_sub(gaps);
    let total: u32 = natural.iter().map(|&w| w as u32).sum();
    if total <= budget {
        return natural.to_vec();
    }

    let mut sorted = natural.to_vec();
    sorted.sort_unstable();

    let mut remaining = budget;
    let mut cap = u16::MAX;
    for (index, &width) in sorted.iter().enumerate() {
        let columns_left = (sorted.len() - index) as u32;
        if width as u32 * columns_left <= remaining {
            remaining -= width as u32;
        } else {
            cap = u16::try_from(remaining / columns_left).unwrap_or(u16::MAX);
            break;
        }
    }

    natural
        .iter()
        .map(|&width| width.min(cap.max(MIN_COLUMN_WIDTH)))
        .collect()
}

/// Cut `text` to at most `max_width` display cells, marking the cut with an
/// ellipsis.
pub fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width - 1 {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Record, ResourceKind};
    use crate::state::{FetchOutcome, TableState};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn user(first: &str, last: &str) -> Record {
        Record::from(json!({ "firstName": first, "lastName": last, "age": 30 }))
    }

    fn loaded_users(items: Vec<Record>) -> TableState {
        let mut table = TableState::new(ResourceKind::Users);
        let ticket = table.start();
        let total = items.len() as u64;
        table.apply_outcome(FetchOutcome::for_ticket(&ticket, Ok(Page { items, total })));
        table
    }

    fn draw(table: &TableState, row_offset: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        let styles = TableStyles::default();
        terminal
            .draw(|frame| {
                render_table(frame, frame.area(), &table.view(), row_offset, &styles);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    // ===== truncate_to_width =====

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("Emily", 10), "Emily");
    }

    #[test]
    fn truncate_marks_cut_with_ellipsis() {
        assert_eq!(truncate_to_width("Johnson", 5), "John…");
    }

    #[test]
    fn truncate_counts_wide_glyphs_as_two_cells() {
        // Each CJK character occupies two cells
        let cut = truncate_to_width("日本語テキスト", 6);
        assert_eq!(cut, "日本…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    // ===== column_widths =====

    #[test]
    fn column_widths_unchanged_when_they_fit() {
        assert_eq!(column_widths(&[5, 10, 3], 40), vec![5, 10, 3]);
    }

    #[test]
    fn column_widths_cap_widest_columns_first() {
        // budget = 30 - 2 gaps = 28; 5 + 10 + 50 does not fit, cap is 13
        let widths = column_widths(&[5, 10, 50], 30);
        assert_eq!(widths, vec![5, 10, 13]);
        assert!(widths.iter().map(|&w| w as u32).sum::<u32>() <= 28);
    }

    #[test]
    fn column_widths_respect_minimum() {
        let widths = column_widths(&[40, 40, 40], 10);
        assert!(widths.iter().all(|&w| w == MIN_COLUMN_WIDTH));
    }

    #[test]
    fn column_widths_empty_input() {
        assert!(column_widths(&[], 80).is_empty());
    }

    // ===== Rendering =====

    #[test]
    fn renders_header_and_rows() {
        let table = loaded_users(vec![user("Emily", "Johnson"), user("Michael", "Williams")]);

        let content = draw(&table, 0);

        assert!(content.contains("FIRST NAME"), "missing header: {}", content);
        assert!(content.contains("Emily"));
        assert!(content.contains("Williams"));
    }

    #[test]
    fn row_offset_skips_leading_rows() {
        let table = loaded_users(vec![user("Emily", "Johnson"), user("Michael", "Williams")]);

        let content = draw(&table, 1);

        assert!(!content.contains("Emily"));
        assert!(content.contains("Michael"));
    }

    #[test]
    fn empty_result_renders_no_data_found() {
        let table = loaded_users(Vec::new());

        assert!(draw(&table, 0).contains("No data found"));
    }

    #[test]
    fn unloaded_table_renders_loading() {
        let mut table = TableState::new(ResourceKind::Users);
        let _ticket = table.start();

        assert!(draw(&table, 0).contains("Loading..."));
    }

    #[test]
    fn failure_shows_error_in_title() {
        let mut table = TableState::new(ResourceKind::Users);
        let ticket = table.start();
        table.apply_outcome(FetchOutcome::for_ticket(
            &ticket,
            Err(crate::model::FetchError::Transport("connection refused".to_string())),
        ));

        let content = draw(&table, 0);

        assert!(content.contains("connection refused"), "got: {}", content);
        assert!(content.contains("No data found"));
    }

    #[test]
    fn missing_field_renders_placeholder() {
        let table = loaded_users(vec![Record::from(json!({ "firstName": "Solo" }))]);

        let content = draw(&table, 0);

        assert!(content.contains("Solo"));
        assert!(content.contains(MISSING_VALUE));
    }
}
