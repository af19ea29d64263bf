//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted in Normal input mode; prompts capture raw keys instead.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Character keys are matched with and without SHIFT, since terminals
    /// disagree on whether symbols like `+` or `?` carry the modifier.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let unshifted = KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT));
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Pagination
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);

        // Page size menu
        keys.bind(KeyCode::Char('+'), none, KeyAction::IncreasePageSize);
        keys.bind(KeyCode::Char('='), none, KeyAction::IncreasePageSize);
        keys.bind(KeyCode::Char('-'), none, KeyAction::DecreasePageSize);

        // Vim-style row scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);

        // Resource and category tabs
        keys.bind(KeyCode::Tab, none, KeyAction::SwitchResource);
        keys.bind(KeyCode::Char(']'), none, KeyAction::NextCategory);
        keys.bind(KeyCode::Char('['), none, KeyAction::PrevCategory);

        // Search and filters
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::ClearSearch);
        keys.bind(KeyCode::Char('f'), none, KeyAction::StartFilter);
        keys.bind(KeyCode::Char('x'), none, KeyAction::ResetFilters);

        // Application
        keys.bind(KeyCode::Char('r'), none, KeyAction::Refresh);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
