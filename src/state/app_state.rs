//! Application state and transitions.
//!
//! AppState is the root state type: both table controllers, which one is on
//! screen, the prompt being edited, and overlay visibility. Transitions are
//! synchronous and side-effect free; any remote work they need comes back as
//! a [`FetchTicket`] for the shell to run.

use crate::model::{Category, KeyAction, PageSize, ResourceKind};
use crate::state::input_handler::{self, InputMode};
use crate::state::table_state::{ApplyResult, FetchOutcome, FetchTicket, TableState, TableStatus};
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Active resource**: Users ⇄ Products (via `SwitchResource`). Each
///   resource keeps its own [`TableState`]; switching never resets either.
/// - **Input mode**: Normal → Search/Filter → Normal (via `StartSearch`,
///   `StartFilter`, then [`AppState::submit_input`] or
///   [`AppState::cancel_input`]).
/// - **Help**: toggled by `Help`, independent of everything else.
#[derive(Debug, Clone)]
pub struct AppState {
    users: TableState,
    products: TableState,

    /// Which table is on screen and receives intents.
    active: ResourceKind,

    /// Prompt currently capturing keystrokes.
    pub input_mode: InputMode,

    /// Whether the help overlay is open.
    pub help_visible: bool,

    /// Category tabs for products, `ALL` first.
    product_tabs: Vec<Category>,

    /// First visible row of the active table's current page.
    row_offset: usize,

    quit_requested: bool,
}

impl AppState {
    /// Create state with both tables at their defaults.
    ///
    /// `product_tabs` lists category slugs; `ALL` is always the first tab and
    /// duplicates are dropped.
    pub fn new(active: ResourceKind, page_size: PageSize, product_tabs: &[String]) -> Self {
        let mut tabs = vec![Category::all()];
        for slug in product_tabs {
            let category = Category::new(slug.as_str());
            if !tabs.contains(&category) {
                tabs.push(category);
            }
        }

        Self {
            users: TableState::with_page_size(ResourceKind::Users, page_size),
            products: TableState::with_page_size(ResourceKind::Products, page_size),
            active,
            input_mode: InputMode::Normal,
            help_visible: false,
            product_tabs: tabs,
            row_offset: 0,
            quit_requested: false,
        }
    }

    // ===== Accessors =====

    /// Resource currently on screen.
    pub fn active(&self) -> ResourceKind {
        self.active
    }

    /// Controller for `kind`.
    pub fn table(&self, kind: ResourceKind) -> &TableState {
        match kind {
            ResourceKind::Users => &self.users,
            ResourceKind::Products => &self.products,
        }
    }

    /// Mutable controller for `kind`.
    pub fn table_mut(&mut self, kind: ResourceKind) -> &mut TableState {
        match kind {
            ResourceKind::Users => &mut self.users,
            ResourceKind::Products => &mut self.products,
        }
    }

    /// Controller of the table on screen.
    pub fn active_table(&self) -> &TableState {
        self.table(self.active)
    }

    /// Mutable controller of the table on screen.
    pub fn active_table_mut(&mut self) -> &mut TableState {
        self.table_mut(self.active)
    }

    /// Product category tabs, `ALL` first.
    pub fn product_tabs(&self) -> &[Category] {
        &self.product_tabs
    }

    /// Index of the products table's current category among the tabs.
    ///
    /// A category reached through a filter rather than a tab selects `ALL`.
    pub fn selected_tab(&self) -> usize {
        self.product_tabs
            .iter()
            .position(|tab| tab == self.products.category())
            .unwrap_or(0)
    }

    /// First visible row of the table.
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// True once the user asked to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // ===== Lifecycle =====

    /// Initial fetch for the table on screen.
    pub fn start(&mut self) -> FetchTicket {
        self.active_table_mut().start()
    }

    /// Route a fetch outcome to the table that issued it.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> ApplyResult {
        let kind = outcome.resource;
        let result = self.table_mut(kind).apply_outcome(outcome);
        if result == ApplyResult::Applied && kind == self.active {
            self.row_offset = 0;
        }
        result
    }

    // ===== Actions =====

    /// Apply a Normal-mode key action.
    ///
    /// Returns the ticket to run if the action changed a page-affecting
    /// field of a table.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<FetchTicket> {
        debug!(?action, resource = %self.active, "Handling action");
        match action {
            KeyAction::NextPage => self.active_table_mut().next_page(),
            KeyAction::PrevPage => self.active_table_mut().prev_page(),
            KeyAction::FirstPage => self.active_table_mut().first_page(),
            KeyAction::LastPage => self.active_table_mut().last_page(),
            KeyAction::IncreasePageSize => {
                let size = self.active_table().page_size().cycle_next();
                self.active_table_mut().set_page_size(size)
            }
            KeyAction::DecreasePageSize => {
                let size = self.active_table().page_size().cycle_prev();
                self.active_table_mut().set_page_size(size)
            }
            KeyAction::ScrollUp => {
                self.row_offset = self.row_offset.saturating_sub(1);
                None
            }
            KeyAction::ScrollDown => {
                let visible = self.active_table().view().items.len();
                if self.row_offset + 1 < visible {
                    self.row_offset += 1;
                }
                None
            }
            KeyAction::SwitchResource => self.switch_resource(),
            KeyAction::NextCategory => self.step_category(1),
            KeyAction::PrevCategory => self.step_category(-1),
            KeyAction::StartSearch => {
                let term = self.active_table().search_term().to_string();
                self.input_mode = input_handler::activate_search(self.take_mode(), &term);
                None
            }
            KeyAction::ClearSearch => {
                self.set_search_term(String::new());
                None
            }
            KeyAction::StartFilter => {
                let value = self.filter_value(0);
                self.input_mode = input_handler::activate_filter(self.take_mode(), 0, &value);
                None
            }
            KeyAction::ResetFilters => self.active_table_mut().reset_filters(),
            KeyAction::Refresh => Some(self.active_table_mut().refresh()),
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                None
            }
            KeyAction::Quit => {
                self.quit_requested = true;
                None
            }
        }
    }

    /// Show the other resource. Starts its table on first visit.
    fn switch_resource(&mut self) -> Option<FetchTicket> {
        self.active = self.active.toggle();
        self.row_offset = 0;
        self.input_mode = InputMode::Normal;
        let table = self.active_table_mut();
        (table.status() == TableStatus::Idle).then(|| table.start())
    }

    fn step_category(&mut self, step: isize) -> Option<FetchTicket> {
        if self.active != ResourceKind::Products {
            return None;
        }
        let count = self.product_tabs.len() as isize;
        let next = (self.selected_tab() as isize + step).rem_euclid(count) as usize;
        let category = self.product_tabs.get(next)?.clone();
        self.products.set_category(category)
    }

    // ===== Prompt editing =====

    fn take_mode(&mut self) -> InputMode {
        std::mem::take(&mut self.input_mode)
    }

    /// Current value of the active table's filter field at `index`.
    fn filter_value(&self, index: usize) -> String {
        self.active
            .filter_fields()
            .get(index)
            .and_then(|field| self.active_table().filters().get(field.key))
            .unwrap_or_default()
            .to_string()
    }

    fn set_search_term(&mut self, term: String) {
        self.active_table_mut().set_search_term(term);
        self.row_offset = 0;
    }

    /// Keep the search term in step with the search buffer.
    fn sync_search(&mut self) {
        if let InputMode::Search(input) = &self.input_mode {
            let term = input.buffer.clone();
            self.set_search_term(term);
        }
    }

    /// Type `ch` into the open prompt.
    pub fn input_char(&mut self, ch: char) {
        self.input_mode = input_handler::handle_char_input(self.take_mode(), ch);
        self.sync_search();
    }

    /// Delete the character before the prompt cursor.
    pub fn input_backspace(&mut self) {
        self.input_mode = input_handler::handle_backspace(self.take_mode());
        self.sync_search();
    }

    /// Move the prompt cursor one character left.
    pub fn input_cursor_left(&mut self) {
        self.input_mode = input_handler::handle_cursor_left(self.take_mode());
    }

    /// Move the prompt cursor one character right.
    pub fn input_cursor_right(&mut self) {
        self.input_mode = input_handler::handle_cursor_right(self.take_mode());
    }

    /// Move the filter prompt to the next filter field.
    pub fn next_filter_field(&mut self) {
        let count = self.active.filter_fields().len();
        let mode = self.take_mode();
        self.input_mode =
            input_handler::cycle_filter_field(mode, count, |idx| self.filter_value(idx));
    }

    /// Close the prompt, applying its contents.
    ///
    /// Search is already live, so only a filter prompt can yield a ticket.
    /// A non-empty users filter replaces the active ones, so the field just
    /// submitted is the one the query uses.
    pub fn submit_input(&mut self) -> Option<FetchTicket> {
        match self.take_mode() {
            InputMode::Filter { field, input } => {
                let key = self.active.filter_fields().get(field)?.key;
                let table = self.active_table_mut();
                let replaces_others = table.resource() == ResourceKind::Users
                    && !input.buffer.is_empty()
                    && table.filters().iter().any(|(existing, _)| existing != key);
                if replaces_others {
                    let cleared = table.reset_filters();
                    table.set_filter(key, &input.buffer).or(cleared)
                } else {
                    table.set_filter(key, &input.buffer)
                }
            }
            InputMode::Search(_) | InputMode::Normal => None,
        }
    }

    /// Close the prompt. The search term typed so far stays applied.
    pub fn cancel_input(&mut self) {
        self.input_mode = input_handler::cancel_input(self.take_mode());
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
