//! Prompt widget for the search and filter inputs.

use crate::model::ResourceKind;
use crate::state::{InputMode, TextInput};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search/filter prompt widget.
///
/// Renders nothing in Normal mode. The filter title names the field being
/// edited for `resource`.
pub struct SearchInput<'a> {
    mode: &'a InputMode,
    resource: ResourceKind,
    block_style: Style,
}

impl<'a> SearchInput<'a> {
    /// Prompt for `mode`, titled for the filter fields of `resource`.
    pub fn new(mode: &'a InputMode, resource: ResourceKind) -> Self {
        Self {
            mode,
            resource,
            block_style: Style::default(),
        }
    }

    /// Background style for the prompt block.
    pub fn block_style(mut self, style: Style) -> Self {
        self.block_style = style;
        self
    }

    fn title(&self) -> Option<String> {
        match self.mode {
            InputMode::Normal => None,
            InputMode::Search(_) => Some(" Search (Enter: done, Esc: cancel) ".to_string()),
            InputMode::Filter { field, .. } => {
                let label = self
                    .resource
                    .filter_fields()
                    .get(*field)
                    .map_or("?", |f| f.label);
                Some(format!(" Filter by {} (Tab: next field, Enter: apply) ", label))
            }
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(title), Some(input)) = (self.title(), self.mode.input()) else {
            return;
        };

        let paragraph = Paragraph::new(cursor_line(input)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(self.block_style),
        );

        paragraph.render(area, buf);
    }
}

/// Split the buffer around the cursor and highlight the character under it.
///
/// At the end of the buffer the cursor is a highlighted blank.
fn cursor_line(input: &TextInput) -> Line<'static> {
    let before: String = input.buffer.chars().take(input.cursor).collect();
    let mut after = input.buffer.chars().skip(input.cursor);
    let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
    let after_text: String = after.collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(
            cursor_char,
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(after_text),
    ])
}
