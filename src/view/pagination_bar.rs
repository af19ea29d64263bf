//! Pagination bar: page markers, row range, and page size.

use super::styles::TableStyles;
use crate::state::{PageMarker, TableView};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the pagination bar for `view` into `area`.
pub fn render_pagination_bar(
    frame: &mut Frame,
    area: Rect,
    view: &TableView<'_>,
    styles: &TableStyles,
) {
    frame.render_widget(Paragraph::new(pagination_line(view, styles)), area);
}

/// Build the pagination line for `view`.
///
/// # Behavior
/// - `total == 0`: empty line, no controls at all.
/// - A single page: row summary only, no page markers.
/// - Otherwise: prev/next arrows around the marker window, current page
///   highlighted, arrows muted at the ends of the range.
pub fn pagination_line(view: &TableView<'_>, styles: &TableStyles) -> Line<'static> {
    if view.total == 0 {
        return Line::default();
    }

    let mut spans = Vec::new();

    if let Some(markers) = &view.markers {
        let prev_style = if view.page > 1 {
            styles.page_link
        } else {
            styles.muted
        };
        let next_style = if view.page < view.total_pages {
            styles.page_link
        } else {
            styles.muted
        };

        spans.push(Span::styled("‹ ", prev_style));
        for marker in markers {
            match marker {
                PageMarker::Page(n) if *n == view.page => {
                    spans.push(Span::styled(format!("[{}]", n), styles.current_page));
                }
                PageMarker::Page(n) => {
                    spans.push(Span::styled(n.to_string(), styles.page_link));
                }
                PageMarker::Ellipsis => {
                    spans.push(Span::styled(marker.to_string(), styles.muted));
                }
            }
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("›", next_style));
        spans.push(Span::raw("   "));
    }

    spans.push(Span::raw(row_summary(view)));
    spans.push(Span::styled(
        format!("   Rows per page: {}", view.page_size),
        styles.muted,
    ));

    Line::from(spans)
}

/// `first-last of total` for the current page, 1-based.
fn row_summary(view: &TableView<'_>) -> String {
    let size = u64::from(view.page_size.get());
    let first = u64::from(view.page.saturating_sub(1)) * size + 1;
    let last = (u64::from(view.page) * size).min(view.total);
    format!("{}-{} of {}", first, last, view.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, PageSize, Record, ResourceKind};
    use crate::state::{FetchOutcome, TableState};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    /// A products table on `page` with `total` rows at page size 5.
    fn table_at(page: u32, total: u64) -> TableState {
        let mut table = TableState::with_page_size(ResourceKind::Products, PageSize::Five);
        let ticket = table.start();
        table.apply_outcome(FetchOutcome::for_ticket(
            &ticket,
            Ok(Page {
                items: vec![Record::default()],
                total,
            }),
        ));
        if let Some(ticket) = table.set_page(page) {
            table.apply_outcome(FetchOutcome::for_ticket(
                &ticket,
                Ok(Page {
                    items: vec![Record::default()],
                    total,
                }),
            ));
        }
        table
    }

    #[test]
    fn zero_total_renders_nothing() {
        let table = table_at(1, 0);
        let line = pagination_line(&table.view(), &TableStyles::default());

        assert!(line_text(&line).is_empty());
    }

    #[test]
    fn single_page_shows_summary_without_markers() {
        let table = table_at(1, 3);
        let text = line_text(&pagination_line(&table.view(), &TableStyles::default()));

        assert!(text.contains("1-3 of 3"), "got: {}", text);
        assert!(!text.contains('‹'), "got: {}", text);
    }

    #[test]
    fn middle_page_shows_window_with_ellipses() {
        let table = table_at(5, 50);
        let text = line_text(&pagination_line(&table.view(), &TableStyles::default()));

        assert!(text.contains("1 ... 4 [5] 6 ... 10"), "got: {}", text);
        assert!(text.contains("21-25 of 50"), "got: {}", text);
        assert!(text.contains("Rows per page: 5"), "got: {}", text);
    }

    #[test]
    fn last_page_summary_is_clamped_to_total() {
        let table = table_at(3, 12);
        let text = line_text(&pagination_line(&table.view(), &TableStyles::default()));

        assert!(text.contains("11-12 of 12"), "got: {}", text);
        assert!(text.contains("[3]"), "got: {}", text);
    }
}
