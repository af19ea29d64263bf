//! Text input handling (pure state transitions).
//!
//! Handles line editing for the search and filter prompts. Every function
//! takes the mode by value and returns the new mode; nothing here touches a
//! table or issues a fetch. Submitting an edit is the caller's job.

/// A single-line edit buffer with a cursor.
///
/// `cursor` counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    /// Text typed so far.
    pub buffer: String,
    /// Cursor position in characters.
    pub cursor: usize,
}

impl TextInput {
    /// Buffer pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.chars().count();
        Self { buffer, cursor }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(idx, _)| idx)
    }

    fn insert(mut self, ch: char) -> Self {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, ch);
        self.cursor += 1;
        self
    }

    fn backspace(mut self) -> Self {
        if self.cursor > 0 {
            let idx = self.byte_index(self.cursor - 1);
            self.buffer.remove(idx);
            self.cursor -= 1;
        }
        self
    }

    fn left(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);
        self
    }

    fn right(mut self) -> Self {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
        self
    }
}

/// What keyboard input currently edits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys map to actions through the key bindings.
    #[default]
    Normal,
    /// Editing the client-side search term.
    Search(TextInput),
    /// Editing the value of the filter field at `field` in the active
    /// resource's filter field list.
    Filter {
        /// Index into the active resource's filter field list.
        field: usize,
        /// The edit buffer for the filter value.
        input: TextInput,
    },
}

impl InputMode {
    /// The edit buffer, if a prompt is open.
    pub fn input(&self) -> Option<&TextInput> {
        match self {
            InputMode::Normal => None,
            InputMode::Search(input) | InputMode::Filter { input, .. } => Some(input),
        }
    }

    /// True while a prompt is open.
    pub fn is_editing(&self) -> bool {
        !matches!(self, InputMode::Normal)
    }

    fn map_input(self, f: impl FnOnce(TextInput) -> TextInput) -> Self {
        match self {
            InputMode::Normal => InputMode::Normal,
            InputMode::Search(input) => InputMode::Search(f(input)),
            InputMode::Filter { field, input } => InputMode::Filter {
                field,
                input: f(input),
            },
        }
    }
}

/// Insert `ch` at the cursor and advance it. No-op in Normal mode.
pub fn handle_char_input(mode: InputMode, ch: char) -> InputMode {
    mode.map_input(|input| input.insert(ch))
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mode: InputMode) -> InputMode {
    mode.map_input(TextInput::backspace)
}

/// Saturates at 0.
pub fn handle_cursor_left(mode: InputMode) -> InputMode {
    mode.map_input(TextInput::left)
}

/// Saturates at the buffer length.
pub fn handle_cursor_right(mode: InputMode) -> InputMode {
    mode.map_input(TextInput::right)
}

/// Open the search prompt pre-filled with the current term.
///
/// No-op unless in Normal mode.
pub fn activate_search(mode: InputMode, current_term: &str) -> InputMode {
    match mode {
        InputMode::Normal => InputMode::Search(TextInput::with_text(current_term)),
        other => other,
    }
}

/// Open the filter prompt on field `field`, pre-filled with its value.
///
/// No-op unless in Normal mode.
pub fn activate_filter(mode: InputMode, field: usize, current_value: &str) -> InputMode {
    match mode {
        InputMode::Normal => InputMode::Filter {
            field,
            input: TextInput::with_text(current_value),
        },
        other => other,
    }
}

/// Move the filter prompt to the next field, wrapping after `field_count`.
///
/// `value_of` supplies the new field's current value. No-op outside Filter
/// mode or when there are no fields.
pub fn cycle_filter_field(
    mode: InputMode,
    field_count: usize,
    value_of: impl FnOnce(usize) -> String,
) -> InputMode {
    match mode {
        InputMode::Filter { field, .. } if field_count > 0 => {
            let next = (field + 1) % field_count;
            InputMode::Filter {
                field: next,
                input: TextInput::with_text(value_of(next)),
            }
        }
        other => other,
    }
}

/// Close any prompt without applying it.
pub fn cancel_input(_mode: InputMode) -> InputMode {
    InputMode::Normal
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
