//! Resource and category tab bars.
//!
//! Both use ratatui's Tabs widget. Selection state lives in AppState:
//! the active resource, and the products table's current category.

use super::styles::TableStyles;
use crate::model::{Category, ResourceKind};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the Users/Products tab bar.
pub fn render_resource_tabs(
    frame: &mut Frame,
    area: Rect,
    active: ResourceKind,
    styles: &TableStyles,
) {
    let titles: Vec<Line> = ResourceKind::ALL
        .iter()
        .map(|kind| Line::from(kind.title()))
        .collect();
    let selected = ResourceKind::ALL
        .iter()
        .position(|&kind| kind == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tabview "),
        )
        .style(styles.inactive_tab)
        .highlight_style(styles.active_tab)
        .select(selected);

    frame.render_widget(tabs, area);
}

/// Render the products category tab row.
///
/// Out-of-bounds selection falls back to the first tab (`ALL`).
pub fn render_category_tabs(
    frame: &mut Frame,
    area: Rect,
    categories: &[Category],
    selected: usize,
    styles: &TableStyles,
) {
    let titles: Vec<Line> = categories
        .iter()
        .map(|category| Line::from(category_label(category)))
        .collect();
    let selected = if selected < categories.len() { selected } else { 0 };

    let tabs = Tabs::new(titles)
        .style(styles.inactive_tab)
        .highlight_style(styles.active_tab)
        .select(selected);

    frame.render_widget(tabs, area);
}

/// Display label for a category tab.
///
/// Slugs are title-cased word by word: `mens-shirts` becomes `Mens Shirts`.
/// `ALL` is shown as-is.
pub fn category_label(category: &Category) -> String {
    if category.is_all() {
        return Category::ALL.to_string();
    }

    category
        .as_str()
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
