//! Pagination window calculation (pure).
//!
//! Compresses a page range into a short marker sequence: first page, a
//! window around the current page, last page, with ellipses standing in for
//! the skipped runs.

use std::fmt;

/// Page ranges up to this length are shown in full.
const DENSE_LIMIT: u32 = 7;

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A clickable page number.
    Page(u32),
    /// Elided run of pages.
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Number of pages needed to show `total` rows at `page_size` rows each.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Compute the marker sequence for `current_page` of `total_pages`.
///
/// Callers suppress the pagination bar entirely when `total_pages <= 1`.
///
/// # Behavior
/// - `total_pages <= 7`: every page, no ellipses.
/// - otherwise: page 1, the window `start..=end`, and the last page, where
///   `start = max(2, current-1)` and `end = min(total-1, current+1)`; the
///   window is widened to `2..=4` near the start and to `total-3..` near the
///   end. An ellipsis is emitted before the window iff `start > 2` and after
///   it iff `end < total-1`.
pub fn compute_window(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages <= DENSE_LIMIT {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(9);
    markers.push(PageMarker::Page(1));

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = current_page.saturating_add(1).min(total_pages - 1);

    if current_page <= 3 {
        end = 4;
    } else if current_page >= total_pages - 2 {
        start = total_pages - 3;
    }

    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.extend((start..=end).map(PageMarker::Page));

    if end < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(3, 5), 1);
    }

    #[test]
    fn total_pages_zero_size_is_zero() {
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn dense_ranges_are_returned_verbatim() {
        assert_eq!(compute_window(1, 0), vec![]);
        assert_eq!(compute_window(1, 1), vec![Page(1)]);
        assert_eq!(
            compute_window(4, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn middle_page_has_ellipses_on_both_sides() {
        assert_eq!(
            compute_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn page_three_of_ten_widens_window_to_four() {
        assert_eq!(
            compute_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn first_page_shows_leading_window() {
        assert_eq!(
            compute_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_shows_trailing_window() {
        assert_eq!(
            compute_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn near_end_widens_window_backwards() {
        assert_eq!(
            compute_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn eight_pages_from_page_four() {
        assert_eq!(
            compute_window(4, 8),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn current_page_beyond_total_clamps_to_trailing_window() {
        assert_eq!(
            compute_window(20, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn huge_page_counts_stay_bounded() {
        let markers = compute_window(500_000, 1_000_000);
        assert_eq!(markers.len(), 7);
        assert_eq!(markers.first(), Some(&Page(1)));
        assert_eq!(markers.last(), Some(&Page(1_000_000)));
    }

    #[test]
    fn marker_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "...");
    }
}
